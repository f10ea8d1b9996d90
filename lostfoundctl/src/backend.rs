//! Collaborator wiring for the live and demo modes.

use anyhow::{Context, Result};
use lostfound_config::{
    AppConfig,
    validation::{validate_document_store, validate_push},
};
use lostfound_contracts::{
    auth::AuthService,
    document::DocumentStore,
    navigation::Navigator,
    push::{PushError, PushRegistry},
};
use lostfound_core::{
    ProfileLoader, ProfileScreen, Session, SessionStore, SignOutCoordinator,
    SignOutOutcome,
    infra::{FirestoreDocumentStore, NativeNotifyRegistry, build_client},
    testing::{InMemoryDocumentStore, RecordingPushRegistry},
};
use lostfound_model::{ProfileDocument, Route, UserId};
use std::{sync::Arc, time::Duration};
use tracing::info;

/// What the command is about to do against the live services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Need {
    Profile,
    SignOut,
}

#[derive(Debug)]
pub struct Backends {
    pub screen: Arc<ProfileScreen>,
}

fn navigator() -> Arc<dyn Navigator> {
    Arc::new(|route: Route| info!(route = %route, "navigation requested"))
}

fn assemble(
    config: &AppConfig,
    store: Arc<dyn DocumentStore>,
    push: Arc<dyn PushRegistry>,
    sessions: SessionStore,
) -> Backends {
    let auth: Arc<dyn AuthService> = Arc::new(sessions);
    let loader =
        ProfileLoader::new(store).with_collection(&config.firestore.collection);
    let sign_out = SignOutCoordinator::new(
        Arc::clone(&auth),
        push,
        config.push.credentials(),
    );
    Backends {
        screen: Arc::new(ProfileScreen::new(
            loader,
            auth,
            sign_out,
            navigator(),
        )),
    }
}

/// Firestore and Native Notify, with `user` signed in locally.
pub async fn live(
    config: &AppConfig,
    user: &UserId,
    id_token: Option<String>,
    need: Need,
) -> Result<Backends> {
    match need {
        Need::Profile => validate_document_store(config)?,
        Need::SignOut => validate_push(config)?,
    }

    let client =
        build_client(config.http.timeout).context("failed to build HTTP client")?;
    let store = FirestoreDocumentStore::new(
        client.clone(),
        &config.firestore.base_url,
        config.firestore.project_id.clone(),
    )?
    .with_api_key(config.firestore.api_key.clone());
    let push = NativeNotifyRegistry::new(client, &config.push.base_url)?;

    let mut session = Session::new(user.clone());
    if let Some(token) = id_token {
        session = session.with_id_token(token);
    }
    let sessions = SessionStore::signed_in(session);
    store.use_session(&sessions).await;

    Ok(assemble(config, Arc::new(store), Arc::new(push), sessions))
}

/// In-memory store seeded with one profile at `u123`; unregister calls are
/// only recorded.
pub fn demo(config: &AppConfig, user: &UserId) -> Backends {
    let store = InMemoryDocumentStore::new();
    if let Ok(demo_user) = UserId::new("u123") {
        store.insert_profile(
            &config.firestore.collection,
            &demo_user,
            &ProfileDocument {
                display_name: Some("Asha".into()),
                email: Some("asha@example.com".into()),
                points: Some(5),
                ..Default::default()
            },
        );
    }

    assemble(
        config,
        Arc::new(store),
        Arc::new(RecordingPushRegistry::new()),
        SessionStore::signed_in(Session::new(user.clone())),
    )
}

/// Sign out and wait, up to `limit`, for the push unregister.
///
/// The process exits right after, and the runtime would cancel a request
/// still in flight.
pub async fn sign_out(
    screen: &ProfileScreen,
    limit: Duration,
) -> (SignOutOutcome, Option<Result<(), PushError>>) {
    let report = screen.sign_out().await;
    let outcome = report.outcome().clone();
    (outcome, report.unregister_settled_within(limit).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lostfound_core::testing::InMemoryDocumentStore;

    #[tokio::test]
    async fn sign_out_waits_for_slow_unregister() {
        let push =
            RecordingPushRegistry::new().with_delay(Duration::from_millis(50));
        let user = UserId::new("u123").unwrap();
        let backends = assemble(
            &AppConfig::default(),
            Arc::new(InMemoryDocumentStore::new()),
            Arc::new(push.clone()),
            SessionStore::signed_in(Session::new(user.clone())),
        );

        let (outcome, unregister) =
            sign_out(&backends.screen, Duration::from_secs(5)).await;

        assert_eq!(outcome, SignOutOutcome::SignedOut);
        assert_eq!(unregister, Some(Ok(())));
        assert_eq!(push.calls().len(), 1);
        assert_eq!(push.calls()[0].0, user);
    }
}
