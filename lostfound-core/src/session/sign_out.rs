//! Sign-out coordination.
//!
//! Device unregistration and session termination run as two independent
//! tasks. Only session termination decides the outcome; the unregister task
//! is detached and its result is available to callers that want to wait.

use lostfound_contracts::auth::AuthService;
use lostfound_contracts::push::{PushError, PushRegistry};
use lostfound_model::{PushCredentials, UserId};
use std::{sync::Arc, time::Duration};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Result of a sign-out request. Never an error: failures are reported here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignOutOutcome {
    SignedOut,
    Failed { reason: String },
}

impl SignOutOutcome {
    pub fn is_signed_out(&self) -> bool {
        matches!(self, SignOutOutcome::SignedOut)
    }
}

#[derive(Debug)]
pub struct SignOutReport {
    outcome: SignOutOutcome,
    unregister: Option<JoinHandle<Result<(), PushError>>>,
}

impl SignOutReport {
    pub fn outcome(&self) -> &SignOutOutcome {
        &self.outcome
    }

    /// Whether an unregister task was launched.
    pub fn unregister_started(&self) -> bool {
        self.unregister.is_some()
    }

    /// Wait for the detached unregister task.
    ///
    /// Returns `None` when no unregister was issued (no signed-in user).
    pub async fn unregister_settled(self) -> Option<Result<(), PushError>> {
        let handle = self.unregister?;
        Some(match handle.await {
            Ok(result) => result,
            Err(join) => Err(PushError::Request(format!(
                "unregister task aborted: {join}"
            ))),
        })
    }

    /// Like [`unregister_settled`](Self::unregister_settled), giving up after
    /// `limit`. Short-lived callers use this before exiting, since a detached
    /// task dies with its runtime.
    pub async fn unregister_settled_within(
        self,
        limit: Duration,
    ) -> Option<Result<(), PushError>> {
        if !self.unregister_started() {
            return None;
        }
        match tokio::time::timeout(limit, self.unregister_settled()).await {
            Ok(settled) => settled,
            Err(_) => {
                warn!(?limit, "push unregister still pending; giving up");
                Some(Err(PushError::Request(format!(
                    "unregister did not finish within {limit:?}"
                ))))
            }
        }
    }
}

pub struct SignOutCoordinator {
    auth: Arc<dyn AuthService>,
    push: Arc<dyn PushRegistry>,
    credentials: PushCredentials,
}

impl std::fmt::Debug for SignOutCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignOutCoordinator")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

impl SignOutCoordinator {
    pub fn new(
        auth: Arc<dyn AuthService>,
        push: Arc<dyn PushRegistry>,
        credentials: PushCredentials,
    ) -> Self {
        Self {
            auth,
            push,
            credentials,
        }
    }

    pub fn credentials(&self) -> &PushCredentials {
        &self.credentials
    }

    /// Unregister `user` from push notifications and terminate the session.
    ///
    /// The unregister request is spawned before session termination is
    /// awaited; its failure is logged and never changes the outcome. Without
    /// a user no unregister is issued but the session is still terminated.
    pub async fn sign_out(&self, user: Option<&UserId>) -> SignOutReport {
        let unregister = user.map(|user| self.spawn_unregister(user.clone()));
        if unregister.is_none() {
            debug!("sign-out without a session user; skipping unregister");
        }

        let outcome = match self.auth.sign_out().await {
            Ok(()) => {
                info!("signed out");
                SignOutOutcome::SignedOut
            }
            Err(err) => {
                warn!(error = %err, "sign-out failed");
                SignOutOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        };

        SignOutReport {
            outcome,
            unregister,
        }
    }

    fn spawn_unregister(
        &self,
        user: UserId,
    ) -> JoinHandle<Result<(), PushError>> {
        let push = Arc::clone(&self.push);
        let credentials = self.credentials.clone();
        tokio::spawn(async move {
            let result = push.unregister(&user, &credentials).await;
            match &result {
                Ok(()) => debug!(user = %user, "push subscription removed"),
                Err(err) => {
                    warn!(user = %user, error = %err, "push unregister failed")
                }
            }
            result
        })
    }
}
