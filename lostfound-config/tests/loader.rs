use lostfound_config::{ConfigLoadError, ConfigLoader, ConfigSource};

use std::{fs, time::Duration};
use tempfile::TempDir;

fn empty_vars() -> Vec<(String, String)> {
    Vec::new()
}

#[test]
fn defaults_when_nothing_is_configured() {
    let dir = TempDir::new().unwrap();
    let load = ConfigLoader::with_vars(empty_vars())
        .base_dir(dir.path())
        .load()
        .unwrap();

    assert_eq!(load.metadata.source, ConfigSource::Default);
    assert!(load.metadata.env_file.is_none());
    assert!(load.metadata.overrides.is_empty());
    assert_eq!(load.config.firestore.collection, "userDetails");
}

#[test]
fn explicit_toml_path_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(
        &path,
        r#"
[firestore]
project_id = "lostfound-app"
api_key = "key-123"

[push]
app_id = 13599
app_token = "token-456"

[http]
timeout = "15s"
"#,
    )
    .unwrap();

    let load = ConfigLoader::with_vars([(
        "LOSTFOUND_CONFIG_PATH",
        path.to_string_lossy().into_owned(),
    )])
    .base_dir(dir.path())
    .load()
    .unwrap();

    assert_eq!(load.metadata.source, ConfigSource::EnvPath(path));
    assert_eq!(load.config.firestore.project_id, "lostfound-app");
    assert_eq!(load.config.firestore.api_key.as_deref(), Some("key-123"));
    assert_eq!(load.config.firestore.collection, "userDetails");
    assert_eq!(load.config.push.app_id, 13599);
    assert_eq!(load.config.http.timeout, Some(Duration::from_secs(15)));
}

#[test]
fn inline_json_is_used_without_a_path() {
    let dir = TempDir::new().unwrap();
    let load = ConfigLoader::with_vars([(
        "LOSTFOUND_CONFIG_JSON",
        r#"{"firestore":{"project_id":"inline","collection":"profiles"}}"#,
    )])
    .base_dir(dir.path())
    .load()
    .unwrap();

    assert_eq!(load.metadata.source, ConfigSource::EnvInline);
    assert_eq!(load.config.firestore.project_id, "inline");
    assert_eq!(load.config.firestore.collection, "profiles");
}

#[test]
fn default_candidate_file_is_discovered() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("config")).unwrap();
    let path = dir.path().join("config/lostfound.json");
    fs::write(&path, r#"{"push":{"app_id":7,"app_token":"t"}}"#).unwrap();

    let load = ConfigLoader::with_vars(empty_vars())
        .base_dir(dir.path())
        .load()
        .unwrap();

    assert_eq!(load.metadata.source, ConfigSource::File(path));
    assert_eq!(load.config.push.app_id, 7);
}

#[test]
fn env_variables_override_file_values() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("lostfound.toml"),
        "[firestore]\nproject_id = \"from-file\"\n",
    )
    .unwrap();

    let load = ConfigLoader::with_vars([
        ("LOSTFOUND_FIRESTORE_PROJECT_ID", "from-env"),
        ("LOSTFOUND_PUSH_APP_ID", "13599"),
        ("LOSTFOUND_HTTP_TIMEOUT", "off"),
    ])
    .base_dir(dir.path())
    .load()
    .unwrap();

    assert_eq!(load.config.firestore.project_id, "from-env");
    assert_eq!(load.config.push.app_id, 13599);
    assert_eq!(load.config.http.timeout, None);
    assert_eq!(
        load.metadata.overrides,
        vec![
            "LOSTFOUND_FIRESTORE_PROJECT_ID",
            "LOSTFOUND_PUSH_APP_ID",
            "LOSTFOUND_HTTP_TIMEOUT"
        ]
    );
}

#[test]
fn dot_env_fills_gaps_but_never_overrides_process_env() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".env"),
        "LOSTFOUND_FIRESTORE_PROJECT_ID=from-dotenv\nLOSTFOUND_PUSH_APP_TOKEN=dotenv-token\n",
    )
    .unwrap();

    let load = ConfigLoader::with_vars([(
        "LOSTFOUND_FIRESTORE_PROJECT_ID",
        "from-process",
    )])
    .base_dir(dir.path())
    .load()
    .unwrap();

    assert_eq!(load.config.firestore.project_id, "from-process");
    assert_eq!(load.config.push.app_token, "dotenv-token");
    assert_eq!(load.metadata.env_file, Some(dir.path().join(".env")));
}

#[test]
fn explicit_env_file_must_exist() {
    let dir = TempDir::new().unwrap();
    let result = ConfigLoader::with_vars(empty_vars())
        .base_dir(dir.path())
        .env_file(dir.path().join("missing.env"))
        .load();

    assert!(matches!(result, Err(ConfigLoadError::EnvFile { .. })));
}

#[test]
fn malformed_app_id_is_reported_with_its_key() {
    let dir = TempDir::new().unwrap();
    let result = ConfigLoader::with_vars([("LOSTFOUND_PUSH_APP_ID", "abc")])
        .base_dir(dir.path())
        .load();

    match result {
        Err(ConfigLoadError::InvalidValue { key, .. }) => {
            assert_eq!(key, "LOSTFOUND_PUSH_APP_ID")
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn invalid_base_url_trips_guard_rail() {
    let dir = TempDir::new().unwrap();
    let result =
        ConfigLoader::with_vars([("LOSTFOUND_FIRESTORE_BASE_URL", "not a url")])
            .base_dir(dir.path())
            .load();

    assert!(matches!(result, Err(ConfigLoadError::GuardRail(_))));
}

#[test]
fn unreadable_config_path_is_a_file_error() {
    let dir = TempDir::new().unwrap();
    let result = ConfigLoader::with_vars([(
        "LOSTFOUND_CONFIG_PATH",
        "does-not-exist.toml",
    )])
    .base_dir(dir.path())
    .load();

    match result {
        Err(ConfigLoadError::File { path, .. }) => {
            assert_eq!(path, dir.path().join("does-not-exist.toml"))
        }
        other => panic!("expected File error, got {other:?}"),
    }
}
