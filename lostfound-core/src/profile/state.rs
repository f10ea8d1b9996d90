//! Profile load state and its per-screen store.

use crate::error::ProfileError;

use lostfound_model::{ErrorInfo, UserProfile};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::warn;

/// Progress of one profile screen activation.
///
/// `Idle` until activation, then `Loading`, then exactly one terminal state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(UserProfile),
    Failed(ErrorInfo),
}

impl LoadState {
    /// Terminal state for a settled fetch. Failures are logged here since
    /// the alert payload drops the cause.
    pub fn settle(result: Result<UserProfile, ProfileError>) -> Self {
        match result {
            Ok(profile) => LoadState::Loaded(profile),
            Err(err) => {
                match &err {
                    ProfileError::FetchFailure(cause) => {
                        warn!(error = %cause, "profile fetch failed")
                    }
                    other => warn!(error = %other, "profile unavailable"),
                }
                LoadState::Failed(err.error_info())
            }
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, LoadState::Loaded(_) | LoadState::Failed(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            LoadState::Loaded(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        match self {
            LoadState::Failed(info) => Some(info),
            _ => None,
        }
    }
}

/// Load state slot owned by one screen instance.
///
/// Backed by a watch channel so the rendering layer can read the latest
/// state without locking and await changes.
#[derive(Clone, Debug)]
pub struct LoadStateStore {
    sender: Arc<watch::Sender<LoadState>>,
    receiver: watch::Receiver<LoadState>,
}

impl LoadStateStore {
    pub fn new() -> Self {
        let (sender, receiver) = watch::channel(LoadState::Idle);
        Self {
            sender: Arc::new(sender),
            receiver,
        }
    }

    pub fn current(&self) -> LoadState {
        self.receiver.borrow().clone()
    }

    /// Access state without cloning
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&LoadState) -> R,
    {
        f(&self.receiver.borrow())
    }

    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.receiver.clone()
    }

    pub fn set(&self, state: LoadState) {
        // Unlike send, send_replace stores the value with no receivers.
        self.sender.send_replace(state);
    }
}

impl Default for LoadStateStore {
    fn default() -> Self {
        Self::new()
    }
}
