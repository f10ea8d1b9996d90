//! Push-notification device registration.

use async_trait::async_trait;
use lostfound_model::{PushCredentials, UserId};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PushError {
    #[error("push request failed: {0}")]
    Request(String),

    #[error("push service rejected unregister with status {status}")]
    Rejected { status: u16 },
}

/// Registry of devices subscribed to push notifications.
#[async_trait]
pub trait PushRegistry: Send + Sync {
    /// Remove the subscription held by `subscriber` for the app identified by
    /// `credentials`.
    async fn unregister(
        &self,
        subscriber: &UserId,
        credentials: &PushCredentials,
    ) -> Result<(), PushError>;
}
