//! Screen focused snapshot of the model surface.
//! Prefer importing from this module in presentation layers instead of
//! reaching into individual tree nodes.

pub use super::alert::ErrorInfo;
pub use super::ids::UserId;
pub use super::profile::{ProfileDocument, UserProfile};
pub use super::push::PushCredentials;
pub use super::route::Route;
