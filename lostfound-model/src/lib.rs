//! Core data model definitions shared across Lostfound crates.
#![allow(missing_docs)]

pub mod alert;
pub mod error;
pub mod ids;
pub mod prelude;
pub mod profile;
pub mod push;
pub mod route;

// Intentionally curated re-exports for downstream consumers.
pub use alert::ErrorInfo;
pub use error::{ModelError, Result as ModelResult};
pub use ids::UserId;
pub use profile::{ProfileDocument, UserProfile};
pub use push::PushCredentials;
pub use route::Route;
