use lostfound_contracts::auth::{AuthError, AuthService};
use lostfound_model::UserId;

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Auth service with a fixed session and scripted sign-out results.
///
/// A successful sign-out clears the session, like the real service.
#[derive(Debug, Clone, Default)]
pub struct StubAuthService {
    inner: Arc<RwLock<InnerAuthState>>,
}

#[derive(Debug, Default)]
struct InnerAuthState {
    user: Option<UserId>,
    sign_out_error: Option<AuthError>,
    sign_out_calls: usize,
}

impl StubAuthService {
    pub fn signed_in(user: UserId) -> Self {
        let stub = Self::default();
        stub.inner.write().expect("lock poisoned").user = Some(user);
        stub
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Make every later sign-out fail with `error`.
    pub fn fail_sign_out(&self, error: AuthError) {
        self.inner.write().expect("lock poisoned").sign_out_error = Some(error);
    }

    pub fn sign_out_calls(&self) -> usize {
        self.inner.read().expect("lock poisoned").sign_out_calls
    }
}

#[async_trait]
impl AuthService for StubAuthService {
    fn current_session_user_id(&self) -> Option<UserId> {
        self.inner.read().expect("lock poisoned").user.clone()
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let mut guard = self.inner.write().expect("lock poisoned");
        guard.sign_out_calls += 1;
        if let Some(error) = &guard.sign_out_error {
            return Err(error.clone());
        }
        guard.user = None;
        Ok(())
    }
}
