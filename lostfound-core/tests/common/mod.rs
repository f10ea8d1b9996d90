#![allow(dead_code)]

use lostfound_core::{
    ProfileLoader, ProfileScreen, SignOutCoordinator,
    testing::{
        InMemoryDocumentStore, RecordingNavigator, RecordingPushRegistry,
        StubAuthService,
    },
};
use lostfound_model::{ProfileDocument, PushCredentials, UserId};
use std::{sync::Arc, time::Duration};

pub const APP_ID: u32 = 13599;
pub const APP_TOKEN: &str = "test-app-token";

pub fn user(raw: &str) -> UserId {
    UserId::new(raw).expect("valid user id")
}

pub fn credentials() -> PushCredentials {
    PushCredentials::new(APP_ID, APP_TOKEN)
}

/// Store holding Asha's profile at `u123`.
pub fn seeded_store() -> InMemoryDocumentStore {
    let store = InMemoryDocumentStore::new();
    seed_asha(&store);
    store
}

pub fn seed_asha(store: &InMemoryDocumentStore) {
    store.insert_profile(
        "userDetails",
        &user("u123"),
        &ProfileDocument {
            display_name: Some("Asha".into()),
            points: Some(5),
            ..Default::default()
        },
    );
}

pub struct Harness {
    pub store: InMemoryDocumentStore,
    pub auth: StubAuthService,
    pub push: RecordingPushRegistry,
    pub navigator: RecordingNavigator,
    pub screen: Arc<ProfileScreen>,
}

pub fn harness(
    store: InMemoryDocumentStore,
    auth: StubAuthService,
    push: RecordingPushRegistry,
) -> Harness {
    let navigator = RecordingNavigator::new();
    let coordinator = SignOutCoordinator::new(
        Arc::new(auth.clone()),
        Arc::new(push.clone()),
        credentials(),
    );
    let screen = Arc::new(ProfileScreen::new(
        ProfileLoader::new(Arc::new(store.clone())),
        Arc::new(auth.clone()),
        coordinator,
        Arc::new(navigator.clone()),
    ));
    Harness {
        store,
        auth,
        push,
        navigator,
        screen,
    }
}

/// Yield until `store` has seen `count` reads.
pub async fn wait_for_reads(store: &InMemoryDocumentStore, count: usize) {
    for _ in 0..500 {
        if store.reads().len() >= count {
            return;
        }
        tokio::time::sleep(Duration::from_millis(2)).await;
    }
    panic!(
        "expected {count} reads, saw {:?}",
        store.reads()
    );
}
