//! Environment keys and defaults.

pub const ENV_CONFIG_PATH: &str = "LOSTFOUND_CONFIG_PATH";
pub const ENV_CONFIG_JSON: &str = "LOSTFOUND_CONFIG_JSON";

pub const ENV_FIRESTORE_PROJECT_ID: &str = "LOSTFOUND_FIRESTORE_PROJECT_ID";
pub const ENV_FIRESTORE_API_KEY: &str = "LOSTFOUND_FIRESTORE_API_KEY";
pub const ENV_FIRESTORE_BASE_URL: &str = "LOSTFOUND_FIRESTORE_BASE_URL";
pub const ENV_PROFILE_COLLECTION: &str = "LOSTFOUND_PROFILE_COLLECTION";

pub const ENV_PUSH_APP_ID: &str = "LOSTFOUND_PUSH_APP_ID";
pub const ENV_PUSH_APP_TOKEN: &str = "LOSTFOUND_PUSH_APP_TOKEN";
pub const ENV_PUSH_BASE_URL: &str = "LOSTFOUND_PUSH_BASE_URL";

pub const ENV_HTTP_TIMEOUT: &str = "LOSTFOUND_HTTP_TIMEOUT";

pub const DEFAULT_FIRESTORE_BASE_URL: &str =
    "https://firestore.googleapis.com/v1";
pub const DEFAULT_PROFILE_COLLECTION: &str = "userDetails";
pub const DEFAULT_PUSH_BASE_URL: &str = "https://app.nativenotify.com";

/// Files probed, relative to the loader's base directory, when neither
/// `LOSTFOUND_CONFIG_PATH` nor `LOSTFOUND_CONFIG_JSON` is set.
pub const DEFAULT_CONFIG_CANDIDATES: &[&str] = &[
    "lostfound.toml",
    "lostfound.json",
    "config/lostfound.toml",
    "config/lostfound.json",
];
