//! Profile document reads and the `Loading` -> terminal transition.

use super::state::LoadState;
use crate::error::ProfileError;

use lostfound_contracts::document::DocumentStore;
use lostfound_model::{ProfileDocument, UserId, UserProfile};
use std::{fmt, sync::Arc};
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

/// Collection holding one profile document per user id.
pub const PROFILE_COLLECTION: &str = "userDetails";

/// Reads the profile document of a session user and settles a
/// [`LoadState`].
///
/// The loader holds no state of its own: every call issues exactly one read
/// and there is no retry, caching or write.
#[derive(Clone)]
pub struct ProfileLoader {
    store: Arc<dyn DocumentStore>,
    collection: String,
}

impl fmt::Debug for ProfileLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileLoader")
            .field("collection", &self.collection)
            .finish_non_exhaustive()
    }
}

impl ProfileLoader {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            collection: PROFILE_COLLECTION.to_string(),
        }
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Single read of `collection/user`.
    #[instrument(skip(self), fields(collection = %self.collection))]
    pub async fn fetch(
        &self,
        user: &UserId,
    ) -> Result<UserProfile, ProfileError> {
        let snapshot = self
            .store
            .get_document(&self.collection, user.as_str())
            .await?;

        match snapshot.data::<ProfileDocument>()? {
            Some(document) => {
                debug!("profile document found");
                Ok(document.into_profile(user.clone()))
            }
            None => Err(ProfileError::NotFound(user.clone())),
        }
    }

    /// Publish `Loading`, read the profile, publish and return the terminal
    /// state. `publish` sees exactly two states per call.
    pub async fn load_profile<F>(&self, user: &UserId, mut publish: F) -> LoadState
    where
        F: FnMut(LoadState),
    {
        publish(LoadState::Loading);
        let terminal = LoadState::settle(self.fetch(user).await);
        publish(terminal.clone());
        terminal
    }

    /// Like [`load_profile`](Self::load_profile), but abandons the read once
    /// `token` is cancelled. Returns `None` without publishing a terminal
    /// state when cancelled.
    pub async fn load_profile_until<F>(
        &self,
        user: &UserId,
        token: &CancellationToken,
        mut publish: F,
    ) -> Option<LoadState>
    where
        F: FnMut(LoadState),
    {
        if token.is_cancelled() {
            return None;
        }
        publish(LoadState::Loading);

        let result = tokio::select! {
            biased;
            _ = token.cancelled() => {
                debug!(user = %user, "profile load cancelled in flight");
                return None;
            }
            result = self.fetch(user) => result,
        };

        if token.is_cancelled() {
            return None;
        }
        let terminal = LoadState::settle(result);
        publish(terminal.clone());
        Some(terminal)
    }
}
