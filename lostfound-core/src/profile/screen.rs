//! Activation owner for one profile screen instance.

use super::{
    loader::ProfileLoader,
    state::{LoadState, LoadStateStore},
    view::ProfileView,
};
use crate::{
    error::ProfileError,
    session::sign_out::{SignOutCoordinator, SignOutReport},
};

use lostfound_contracts::{auth::AuthService, navigation::Navigator};
use lostfound_model::Route;
use std::{
    fmt,
    sync::{
        Arc, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicBool, Ordering},
    },
};
use tokio::{sync::watch, task::JoinHandle};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// How an activation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The activation wrote this terminal state to the screen.
    Settled(LoadState),
    /// A newer activation or a teardown invalidated this one; its result was
    /// discarded.
    Cancelled,
}

#[derive(Debug)]
struct ActivationSlot {
    generation: u64,
    token: CancellationToken,
}

/// One profile screen instance.
///
/// Each [`activate`](Self::activate) call gets its own cancellation token and
/// generation number and invalidates the previous activation. A state write
/// happens under the slot lock and only for the current, uncancelled
/// generation, so a fetch that settles after re-activation or
/// [`teardown`](Self::teardown) never touches the store.
pub struct ProfileScreen {
    loader: ProfileLoader,
    auth: Arc<dyn AuthService>,
    sign_out: SignOutCoordinator,
    navigator: Arc<dyn Navigator>,
    state: LoadStateStore,
    slot: Mutex<ActivationSlot>,
    alert_dismissed: AtomicBool,
}

impl fmt::Debug for ProfileScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let generation = self
            .slot
            .try_lock()
            .map(|slot| slot.generation)
            .unwrap_or_default();

        f.debug_struct("ProfileScreen")
            .field("loader", &self.loader)
            .field("sign_out", &self.sign_out)
            .field("state", &self.state.current())
            .field("generation", &generation)
            .finish_non_exhaustive()
    }
}

impl ProfileScreen {
    pub fn new(
        loader: ProfileLoader,
        auth: Arc<dyn AuthService>,
        sign_out: SignOutCoordinator,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            loader,
            auth,
            sign_out,
            navigator,
            state: LoadStateStore::new(),
            slot: Mutex::new(ActivationSlot {
                generation: 0,
                token: CancellationToken::new(),
            }),
            alert_dismissed: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> LoadState {
        self.state.current()
    }

    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.state.subscribe()
    }

    /// Projection of the current state for the rendering layer.
    pub fn view(&self) -> ProfileView {
        let dismissed = self.alert_dismissed.load(Ordering::Acquire);
        self.state
            .with_state(|state| ProfileView::project(state, dismissed))
    }

    /// Hide the failure alert. The load state is left untouched; the next
    /// activation shows alerts again.
    pub fn dismiss_alert(&self) {
        self.alert_dismissed.store(true, Ordering::Release);
    }

    fn lock_slot(&self) -> MutexGuard<'_, ActivationSlot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin_activation(&self) -> (u64, CancellationToken) {
        let mut slot = self.lock_slot();
        slot.token.cancel();
        slot.generation += 1;
        slot.token = CancellationToken::new();
        self.alert_dismissed.store(false, Ordering::Release);
        (slot.generation, slot.token.clone())
    }

    /// Write `state` if `generation` is still the live activation.
    fn publish(
        &self,
        generation: u64,
        token: &CancellationToken,
        state: LoadState,
    ) -> bool {
        let slot = self.lock_slot();
        if slot.generation != generation || token.is_cancelled() {
            debug!(generation, "discarding state from stale activation");
            return false;
        }
        self.state.set(state);
        true
    }

    /// Run one activation to completion on the caller's task.
    ///
    /// The session user id is resolved once, at activation time. Without a
    /// session the screen goes `Loading` -> `Failed` without any read.
    pub async fn activate(&self) -> Activation {
        let (generation, token) = self.begin_activation();
        debug!(generation, "profile screen activated");

        let Some(user) = self.auth.current_session_user_id() else {
            if !self.publish(generation, &token, LoadState::Loading) {
                return Activation::Cancelled;
            }
            let failed = LoadState::settle(Err(ProfileError::Unauthenticated));
            return if self.publish(generation, &token, failed.clone()) {
                Activation::Settled(failed)
            } else {
                Activation::Cancelled
            };
        };

        let mut wrote_terminal = false;
        let terminal = self
            .loader
            .load_profile_until(&user, &token, |state| {
                let terminal = state.is_terminal();
                if self.publish(generation, &token, state) && terminal {
                    wrote_terminal = true;
                }
            })
            .await;

        match terminal {
            Some(state) if wrote_terminal => Activation::Settled(state),
            _ => Activation::Cancelled,
        }
    }

    /// Run an activation as its own task, the way a mounted screen does.
    pub fn spawn_activation(self: &Arc<Self>) -> JoinHandle<Activation> {
        let screen = Arc::clone(self);
        tokio::spawn(async move { screen.activate().await })
    }

    /// Invalidate the live activation. An in-flight read is abandoned and
    /// its result never written.
    pub fn teardown(&self) {
        let slot = self.lock_slot();
        slot.token.cancel();
        debug!(generation = slot.generation, "profile screen torn down");
    }

    pub fn navigate(&self, route: Route) {
        debug!(route = %route, "navigating from profile screen");
        self.navigator.navigate(route);
    }

    /// Sign the current session out. Never changes the load state.
    pub async fn sign_out(&self) -> SignOutReport {
        let user = self.auth.current_session_user_id();
        info!(signed_in = user.is_some(), "sign-out requested");
        self.sign_out.sign_out(user.as_ref()).await
    }
}
