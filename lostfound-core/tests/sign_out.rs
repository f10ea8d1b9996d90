mod common;

use common::{APP_ID, APP_TOKEN, credentials, harness, seeded_store, user};
use lostfound_contracts::{
    auth::{AuthError, AuthService},
    push::PushError,
};
use lostfound_core::{
    LoadState, Session, SessionState, SessionStore, SignOutCoordinator,
    SignOutOutcome,
    testing::{RecordingPushRegistry, StubAuthService},
};
use std::{sync::Arc, time::Duration};

#[tokio::test]
async fn sign_out_unregisters_and_terminates_the_session() {
    let h = harness(
        seeded_store(),
        StubAuthService::signed_in(user("u123")),
        RecordingPushRegistry::new(),
    );

    let report = h.screen.sign_out().await;

    assert_eq!(report.outcome(), &SignOutOutcome::SignedOut);
    assert_eq!(h.auth.sign_out_calls(), 1);
    assert_eq!(h.auth.current_session_user_id(), None);

    assert_eq!(report.unregister_settled().await, Some(Ok(())));
    let calls = h.push.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, user("u123"));
    assert_eq!(calls[0].1.app_id, APP_ID);
    assert_eq!(calls[0].1.app_token, APP_TOKEN);
}

#[tokio::test]
async fn failed_sign_out_is_reported_not_raised() {
    let auth = StubAuthService::signed_in(user("u123"));
    auth.fail_sign_out(AuthError::Network("offline".into()));
    let h = harness(seeded_store(), auth, RecordingPushRegistry::new());
    h.screen.activate().await;
    let before = h.screen.state();

    let report = h.screen.sign_out().await;

    assert!(matches!(
        report.outcome(),
        SignOutOutcome::Failed { reason } if reason.contains("offline")
    ));
    assert_eq!(h.auth.sign_out_calls(), 1);
    assert_eq!(h.screen.state(), before);
    assert!(matches!(before, LoadState::Loaded(_)));
}

#[tokio::test]
async fn unregister_failure_does_not_change_the_outcome() {
    let h = harness(
        seeded_store(),
        StubAuthService::signed_in(user("u123")),
        RecordingPushRegistry::failing(PushError::Rejected { status: 500 }),
    );

    let report = h.screen.sign_out().await;

    assert_eq!(report.outcome(), &SignOutOutcome::SignedOut);
    assert_eq!(
        report.unregister_settled().await,
        Some(Err(PushError::Rejected { status: 500 }))
    );
}

#[tokio::test]
async fn sign_out_before_activation_leaves_state_alone() {
    let h = harness(
        seeded_store(),
        StubAuthService::signed_in(user("u123")),
        RecordingPushRegistry::new(),
    );
    let report = h.screen.sign_out().await;

    assert!(report.outcome().is_signed_out());
    assert_eq!(h.screen.state(), LoadState::Idle);
}

#[tokio::test]
async fn sign_out_without_session_skips_unregister() {
    let h = harness(
        seeded_store(),
        StubAuthService::signed_out(),
        RecordingPushRegistry::new(),
    );

    let report = h.screen.sign_out().await;

    assert!(!report.unregister_started());
    assert_eq!(report.outcome(), &SignOutOutcome::SignedOut);
    assert_eq!(h.auth.sign_out_calls(), 1);
    assert_eq!(report.unregister_settled().await, None);
    assert!(h.push.calls().is_empty());
}

#[tokio::test]
async fn session_store_listeners_observe_sign_out() {
    let sessions = SessionStore::signed_in(Session::new(user("u42")));
    let mut listener = sessions.subscribe();
    listener.mark_unchanged();
    let push = RecordingPushRegistry::new();
    let coordinator = SignOutCoordinator::new(
        Arc::new(sessions.clone()),
        Arc::new(push.clone()),
        credentials(),
    );

    let user_id = sessions.current_session_user_id();
    let report = coordinator.sign_out(user_id.as_ref()).await;

    assert!(report.outcome().is_signed_out());
    listener.changed().await.expect("session store alive");
    assert_eq!(*listener.borrow(), SessionState::SignedOut);
    report.unregister_settled().await;
    assert_eq!(push.calls()[0].0, user("u42"));
}

#[tokio::test]
async fn waiting_for_a_slow_unregister_sees_it_complete() {
    let h = harness(
        seeded_store(),
        StubAuthService::signed_in(user("u123")),
        RecordingPushRegistry::new().with_delay(Duration::from_millis(50)),
    );

    let report = h.screen.sign_out().await;
    assert!(report.outcome().is_signed_out());
    assert!(h.push.calls().is_empty());

    let settled = report
        .unregister_settled_within(Duration::from_secs(5))
        .await;

    assert_eq!(settled, Some(Ok(())));
    assert_eq!(h.push.calls().len(), 1);
}

#[tokio::test]
async fn bounded_wait_reports_a_stuck_unregister() {
    let h = harness(
        seeded_store(),
        StubAuthService::signed_in(user("u123")),
        RecordingPushRegistry::new().with_delay(Duration::from_secs(30)),
    );

    let report = h.screen.sign_out().await;
    let settled = report
        .unregister_settled_within(Duration::from_millis(20))
        .await;

    assert!(matches!(settled, Some(Err(PushError::Request(_)))));
    assert_eq!(h.auth.sign_out_calls(), 1);
}
