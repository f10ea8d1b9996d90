//! Profile screen core for Lostfound.
//!
//! A profile screen activation reads the signed-in user's profile document
//! and settles a [`LoadState`](profile::LoadState) that the rendering layer
//! observes. Sign-out unregisters the device from push notifications and
//! terminates the session as two independent tasks.
//!
//! Every collaborator is injected through the traits in
//! `lostfound-contracts`: [`infra`] holds the HTTP-backed implementations and
//! [`testing`] the in-process stubs used by tests and the demo mode of
//! `lostfoundctl`.

pub mod error;
pub mod infra;
pub mod profile;
pub mod session;
pub mod testing;

pub use error::ProfileError;
pub use profile::{
    Activation, LoadState, LoadStateStore, ProfileLoader, ProfileScreen,
    ProfileView,
};
pub use session::{
    Session, SessionState, SessionStore,
    sign_out::{SignOutCoordinator, SignOutOutcome, SignOutReport},
};
