mod duration;

use crate::constants::{
    DEFAULT_FIRESTORE_BASE_URL, DEFAULT_PROFILE_COLLECTION,
    DEFAULT_PUSH_BASE_URL,
};

use lostfound_model::PushCredentials;
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Duration};

const REDACTED: &str = "<redacted>";

/// Resolved configuration for the live backends.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub firestore: FirestoreConfig,
    pub push: PushConfig,
    pub http: HttpConfig,
}

impl AppConfig {
    /// Copy with every secret replaced, suitable for printing.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.firestore.api_key.is_some() {
            copy.firestore.api_key = Some(REDACTED.to_string());
        }
        if !copy.push.app_token.is_empty() {
            copy.push.app_token = REDACTED.to_string();
        }
        copy
    }
}

/// Document store location. `collection` holds one profile document per
/// user, keyed by the session user id.
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct FirestoreConfig {
    pub project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub base_url: String,
    pub collection: String,
}

impl Default for FirestoreConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            api_key: None,
            base_url: DEFAULT_FIRESTORE_BASE_URL.to_string(),
            collection: DEFAULT_PROFILE_COLLECTION.to_string(),
        }
    }
}

impl std::fmt::Debug for FirestoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirestoreConfig")
            .field("project_id", &self.project_id)
            .field("api_key", &self.api_key.as_ref().map(|_| REDACTED))
            .field("base_url", &self.base_url)
            .field("collection", &self.collection)
            .finish()
    }
}

/// Push-notification app used when unregistering a device on sign-out.
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct PushConfig {
    pub app_id: u32,
    pub app_token: String,
    pub base_url: String,
}

impl PushConfig {
    pub fn credentials(&self) -> PushCredentials {
        PushCredentials::new(self.app_id, self.app_token.clone())
    }
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            app_id: 0,
            app_token: String::new(),
            base_url: DEFAULT_PUSH_BASE_URL.to_string(),
        }
    }
}

impl std::fmt::Debug for PushConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushConfig")
            .field("app_id", &self.app_id)
            .field("app_token", &REDACTED)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Transport tuning shared by the HTTP adapters.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout. Unset means requests may wait indefinitely.
    #[serde(
        with = "duration::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout: Option<Duration>,
}

/// Source that produced the base configuration, before environment
/// overrides were applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub source: ConfigSource,
    /// `.env` file whose entries were merged, if any.
    pub env_file: Option<PathBuf>,
    /// Environment keys that overrode a value from `source`.
    pub overrides: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_endpoints() {
        let config = AppConfig::default();
        assert_eq!(config.firestore.collection, "userDetails");
        assert_eq!(
            config.firestore.base_url,
            "https://firestore.googleapis.com/v1"
        );
        assert_eq!(config.push.base_url, "https://app.nativenotify.com");
        assert_eq!(config.http.timeout, None);
    }

    #[test]
    fn redacted_hides_secrets_only() {
        let mut config = AppConfig::default();
        config.firestore.project_id = "lostfound".into();
        config.firestore.api_key = Some("key-123".into());
        config.push.app_id = 13599;
        config.push.app_token = "token-456".into();

        let redacted = config.redacted();
        assert_eq!(redacted.firestore.project_id, "lostfound");
        assert_eq!(redacted.firestore.api_key.as_deref(), Some(REDACTED));
        assert_eq!(redacted.push.app_id, 13599);
        assert_eq!(redacted.push.app_token, REDACTED);
    }

    #[test]
    fn debug_never_prints_secrets() {
        let mut config = AppConfig::default();
        config.firestore.api_key = Some("key-123".into());
        config.push.app_token = "token-456".into();

        let rendered = format!("{config:?}");
        assert!(!rendered.contains("key-123"));
        assert!(!rendered.contains("token-456"));
    }
}
