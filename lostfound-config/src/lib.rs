//! Shared configuration library for Lostfound.
//!
//! Centralizes where backend settings come from (`.env`, a TOML/JSON file,
//! inline JSON, individual environment variables), the defaults for each
//! setting, and the guard rails checked before talking to live services.
//! Loading never mutates the process environment.

pub mod constants;
pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::{
    AppConfig, ConfigMetadata, ConfigSource, FirestoreConfig, HttpConfig,
    PushConfig,
};
pub use validation::ConfigGuardRailError;
