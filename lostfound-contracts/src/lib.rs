//! Trait surfaces that describe the collaborators of the profile screen.
//!
//! The document store, the auth service, the push-notification registry and
//! the navigator are all remote or platform services. Each is reached only
//! through the traits here so the screen logic can be driven by stubs.

pub mod auth;
pub mod document;
pub mod navigation;
pub mod push;

/// Frequently used contracts for screen and orchestration code.
pub mod prelude {
    pub use super::auth::{AuthError, AuthService};
    pub use super::document::{DocumentSnapshot, DocumentStore, StoreError};
    pub use super::navigation::Navigator;
    pub use super::push::{PushError, PushRegistry};
}
