//! Authentication session state.
//!
//! The session is process-wide and owned here; screens only read the user
//! id through [`AuthService`] and request termination.

pub mod sign_out;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lostfound_contracts::auth::{AuthError, AuthService};
use lostfound_model::UserId;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
    /// Bearer token for the document store, when the session has one.
    pub id_token: Option<String>,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            id_token: None,
            started_at: Utc::now(),
        }
    }

    pub fn with_id_token(mut self, token: impl Into<String>) -> Self {
        self.id_token = Some(token.into());
        self
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("has_id_token", &self.id_token.is_some())
            .field("started_at", &self.started_at)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    SignedOut,
    SignedIn(Session),
}

impl SessionState {
    pub fn is_signed_in(&self) -> bool {
        matches!(self, SessionState::SignedIn(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::SignedIn(session) => Some(session),
            SessionState::SignedOut => None,
        }
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.session().map(|session| &session.user_id)
    }
}

/// Thread-safe session store using a watch channel.
///
/// Subscribers play the role of the auth-state listener: they observe the
/// switch to [`SessionState::SignedOut`] after a sign-out.
#[derive(Clone, Debug)]
pub struct SessionStore {
    sender: Arc<watch::Sender<SessionState>>,
    receiver: watch::Receiver<SessionState>,
}

impl SessionStore {
    pub fn new() -> Self {
        let (sender, receiver) = watch::channel(SessionState::SignedOut);
        Self {
            sender: Arc::new(sender),
            receiver,
        }
    }

    pub fn signed_in(session: Session) -> Self {
        let store = Self::new();
        store.sign_in(session);
        store
    }

    pub fn current(&self) -> SessionState {
        self.receiver.borrow().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.receiver.borrow().is_signed_in()
    }

    pub fn id_token(&self) -> Option<String> {
        self.receiver
            .borrow()
            .session()
            .and_then(|session| session.id_token.clone())
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.receiver.clone()
    }

    pub fn sign_in(&self, session: Session) {
        info!(user = %session.user_id, "session started");
        self.sender.send_replace(SessionState::SignedIn(session));
    }

    pub fn clear(&self) {
        self.sender.send_replace(SessionState::SignedOut);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthService for SessionStore {
    fn current_session_user_id(&self) -> Option<UserId> {
        self.receiver.borrow().user_id().cloned()
    }

    /// Local session termination; signing out twice is not an error.
    async fn sign_out(&self) -> Result<(), AuthError> {
        if let Some(user) = self.current_session_user_id() {
            info!(user = %user, "session terminated");
        }
        self.clear();
        Ok(())
    }
}
