//! Configuration loading.
//!
//! Evaluation order:
//! 1) `.env` entries are merged under the process environment (never over it),
//! 2) `$LOSTFOUND_CONFIG_PATH` (TOML or JSON file),
//! 3) `$LOSTFOUND_CONFIG_JSON` (inline JSON),
//! 4) the first existing default candidate file,
//! 5) built-in defaults,
//!
//! after which individual `LOSTFOUND_*` variables override single fields.

pub mod error;

use crate::{
    constants::*,
    models::{AppConfig, ConfigMetadata, ConfigSource},
    util::{non_blank, parse_timeout},
    validation::validate_shape,
};
use error::ConfigLoadError;

use anyhow::{Context, anyhow};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Loaded configuration and where it came from.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: AppConfig,
    pub metadata: ConfigMetadata,
}

/// Resolves [`AppConfig`] from a snapshot of environment variables.
///
/// The snapshot is taken once; the process environment is never written,
/// so loaders built from explicit maps are deterministic in tests.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    vars: BTreeMap<String, String>,
    base_dir: PathBuf,
    env_file: Option<PathBuf>,
}

impl ConfigLoader {
    /// Snapshot the current process environment.
    pub fn from_process_env() -> Self {
        Self::with_vars(std::env::vars())
    }

    pub fn with_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            base_dir: PathBuf::from("."),
            env_file: None,
        }
    }

    /// Directory used for `.env` discovery and default candidate files.
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// Use an explicit `.env` file. Unlike the implicit `.env` in the base
    /// directory, an explicit file must exist.
    pub fn env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let mut metadata = ConfigMetadata::default();
        let vars = self.merged_vars(&mut metadata)?;

        let (mut config, source) = self.base_config(&vars)?;
        metadata.source = source;
        metadata.overrides = apply_overrides(&mut config, &vars)?;

        validate_shape(&config)?;

        debug!(
            source = ?metadata.source,
            overrides = ?metadata.overrides,
            "configuration loaded"
        );
        Ok(ConfigLoad { config, metadata })
    }

    fn merged_vars(
        &self,
        metadata: &mut ConfigMetadata,
    ) -> Result<BTreeMap<String, String>, ConfigLoadError> {
        let mut vars = self.vars.clone();

        let (path, required) = match &self.env_file {
            Some(path) => (path.clone(), true),
            None => (self.base_dir.join(".env"), false),
        };
        if !required && !path.exists() {
            return Ok(vars);
        }

        let entries = dotenvy::from_path_iter(&path).map_err(|source| {
            ConfigLoadError::EnvFile {
                path: path.clone(),
                source,
            }
        })?;
        for entry in entries {
            let (key, value) =
                entry.map_err(|source| ConfigLoadError::EnvFile {
                    path: path.clone(),
                    source,
                })?;
            vars.entry(key).or_insert(value);
        }
        metadata.env_file = Some(path);
        Ok(vars)
    }

    fn base_config(
        &self,
        vars: &BTreeMap<String, String>,
    ) -> Result<(AppConfig, ConfigSource), ConfigLoadError> {
        if let Some(raw) = non_blank(vars.get(ENV_CONFIG_PATH)) {
            let path = self.resolve(&raw);
            let config = load_from_file(&path).map_err(|source| {
                ConfigLoadError::File {
                    path: path.clone(),
                    source,
                }
            })?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = non_blank(vars.get(ENV_CONFIG_JSON)) {
            let config = serde_json::from_str(&raw)
                .map_err(|source| ConfigLoadError::InlineJson { source })?;
            return Ok((config, ConfigSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let config = load_from_file(&path).map_err(|source| {
                ConfigLoadError::File {
                    path: path.clone(),
                    source,
                }
            })?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((AppConfig::default(), ConfigSource::Default))
    }

    fn resolve(&self, raw: &str) -> PathBuf {
        let path = PathBuf::from(raw);
        if path.is_absolute() {
            path
        } else {
            self.base_dir.join(path)
        }
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        DEFAULT_CONFIG_CANDIDATES
            .iter()
            .map(|candidate| self.base_dir.join(candidate))
            .find(|path| path.exists())
    }
}

pub fn load_from_file(path: &Path) -> anyhow::Result<AppConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&contents)
            .with_context(|| format!("invalid config {}", path.display())),
        Some("toml") => toml::from_str(&contents).map_err(|err| {
            anyhow!("invalid config {}: {}", path.display(), err)
        }),
        _ => parse_from_str(&contents, &path.display().to_string()),
    }
}

pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<AppConfig> {
    // Try TOML first, then JSON for convenience.
    toml::from_str(contents).or_else(|toml_err| {
        serde_json::from_str(contents).map_err(|json_err| {
            anyhow!(
                "failed to parse config {}: toml error: {}; json error: {}",
                origin,
                toml_err,
                json_err
            )
        })
    })
}

fn apply_overrides(
    config: &mut AppConfig,
    vars: &BTreeMap<String, String>,
) -> Result<Vec<&'static str>, ConfigLoadError> {
    let mut applied = Vec::new();
    let mut take = |key: &'static str| {
        let value = non_blank(vars.get(key));
        if value.is_some() {
            applied.push(key);
        }
        value
    };

    if let Some(value) = take(ENV_FIRESTORE_PROJECT_ID) {
        config.firestore.project_id = value;
    }
    if let Some(value) = take(ENV_FIRESTORE_API_KEY) {
        config.firestore.api_key = Some(value);
    }
    if let Some(value) = take(ENV_FIRESTORE_BASE_URL) {
        config.firestore.base_url = value;
    }
    if let Some(value) = take(ENV_PROFILE_COLLECTION) {
        config.firestore.collection = value;
    }
    if let Some(value) = take(ENV_PUSH_APP_ID) {
        config.push.app_id = value.parse().map_err(|err| {
            ConfigLoadError::InvalidValue {
                key: ENV_PUSH_APP_ID,
                reason: format!("{err}"),
            }
        })?;
    }
    if let Some(value) = take(ENV_PUSH_APP_TOKEN) {
        config.push.app_token = value;
    }
    if let Some(value) = take(ENV_PUSH_BASE_URL) {
        config.push.base_url = value;
    }
    if let Some(value) = take(ENV_HTTP_TIMEOUT) {
        config.http.timeout = parse_timeout(&value).map_err(|err| {
            ConfigLoadError::InvalidValue {
                key: ENV_HTTP_TIMEOUT,
                reason: err.to_string(),
            }
        })?;
    }

    Ok(applied)
}
