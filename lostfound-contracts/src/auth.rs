//! Session ownership.

use async_trait::async_trait;
use lostfound_model::UserId;
use thiserror::Error;

/// Authentication failures visible to callers of [`AuthService`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("sign-out failed: {0}")]
    SignOutFailed(String),

    #[error("network error: {0}")]
    Network(String),
}

/// The process-wide authentication service.
///
/// The session id is read, never written, by screen code. Sign-out only
/// requests termination; observers of the auth state react to the result.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Identifier of the signed-in principal, if any.
    fn current_session_user_id(&self) -> Option<UserId>;

    /// Terminate the current session.
    async fn sign_out(&self) -> Result<(), AuthError>;
}
