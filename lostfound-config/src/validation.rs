//! Guard rails checked before the live adapters are built.

use crate::models::AppConfig;

use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigGuardRailError {
    #[error("{field} is not a valid http(s) URL: {reason}")]
    InvalidUrl { field: &'static str, reason: String },
    #[error("firestore.collection must not be empty")]
    EmptyCollection,
    #[error(
        "firestore.project_id is required (set LOSTFOUND_FIRESTORE_PROJECT_ID)"
    )]
    MissingProjectId,
    #[error("push.app_id is required (set LOSTFOUND_PUSH_APP_ID)")]
    MissingPushAppId,
    #[error("push.app_token is required (set LOSTFOUND_PUSH_APP_TOKEN)")]
    MissingPushAppToken,
}

fn check_url(field: &'static str, raw: &str) -> Result<(), ConfigGuardRailError> {
    let url = Url::parse(raw).map_err(|err| ConfigGuardRailError::InvalidUrl {
        field,
        reason: err.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigGuardRailError::InvalidUrl {
            field,
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

/// Checks every loaded configuration must pass.
pub fn validate_shape(config: &AppConfig) -> Result<(), ConfigGuardRailError> {
    check_url("firestore.base_url", &config.firestore.base_url)?;
    check_url("push.base_url", &config.push.base_url)?;
    if config.firestore.collection.trim().is_empty() {
        return Err(ConfigGuardRailError::EmptyCollection);
    }
    Ok(())
}

/// Required before reading profiles from the live document store.
pub fn validate_document_store(
    config: &AppConfig,
) -> Result<(), ConfigGuardRailError> {
    if config.firestore.project_id.trim().is_empty() {
        return Err(ConfigGuardRailError::MissingProjectId);
    }
    Ok(())
}

/// Required before unregistering devices with the live push service.
pub fn validate_push(config: &AppConfig) -> Result<(), ConfigGuardRailError> {
    if config.push.app_id == 0 {
        return Err(ConfigGuardRailError::MissingPushAppId);
    }
    if config.push.app_token.trim().is_empty() {
        return Err(ConfigGuardRailError::MissingPushAppToken);
    }
    Ok(())
}
