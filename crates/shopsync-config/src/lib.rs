//! Configuration for the shopsync console.
//!
//! TOML profiles plus environment-variable overrides, resolving to the
//! explicit [`ApiConfig`] the API client is constructed from. Nothing
//! downstream reads ambient configuration — this crate is the only
//! place the environment is consulted.
//!
//! Resolution order for each setting: environment variable
//! (`SHOPSYNC_API_URL`, `SHOPSYNC_ACCESS_KEY`), then the selected
//! profile in `config.toml`.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use shopsync_api::ApiConfig;

/// Environment variable overriding the catalog service root.
pub const ENV_API_URL: &str = "SHOPSYNC_API_URL";
/// Environment variable overriding (or supplying) the access key.
pub const ENV_ACCESS_KEY: &str = "SHOPSYNC_ACCESS_KEY";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("profile '{name}' not found in configuration")]
    ProfileNotFound { name: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named catalog profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_timeout() -> u64 {
    30
}

/// A named catalog profile.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    /// Catalog service root (e.g., "http://localhost:5000").
    pub api_url: String,

    /// Access key (plaintext — prefer the env var).
    pub access_key: Option<String>,

    /// Override timeout in seconds.
    pub timeout: Option<u64>,
}

// ── Paths ───────────────────────────────────────────────────────────

/// Platform config directory (e.g. `~/.config/shopsync`).
pub fn config_dir() -> PathBuf {
    ProjectDirs::from("", "", "shopsync")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Full path to `config.toml`.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// ── Loading ─────────────────────────────────────────────────────────

/// Load configuration from a specific TOML file, layered over defaults.
pub fn load_config_from(path: &std::path::Path) -> Result<Config, ConfigError> {
    let config = Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .extract()?;
    Ok(config)
}

/// Load configuration from the default path, falling back to defaults
/// when no file exists or the file fails to parse.
pub fn load_config_or_default() -> Config {
    load_config_from(&config_path()).unwrap_or_default()
}

/// Write `config` to the default path, creating the directory if needed.
pub fn save_config(config: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, toml::to_string_pretty(config)?)?;
    Ok(path)
}

/// Pick the active profile name: explicit selection, then the config's
/// `default_profile`, then `"default"`.
pub fn active_profile_name(selected: Option<&str>, config: &Config) -> String {
    selected
        .map(str::to_owned)
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

// ── Resolution ──────────────────────────────────────────────────────

/// Resolve a profile into the explicit [`ApiConfig`] handed to
/// `CatalogClient::new`, applying environment overrides.
pub fn resolve_profile(profile: &Profile, defaults: &Defaults) -> Result<ApiConfig, ConfigError> {
    let url_str = std::env::var(ENV_API_URL).unwrap_or_else(|_| profile.api_url.clone());
    let base_url: Url = url_str.parse().map_err(|_| ConfigError::Validation {
        field: "api_url".into(),
        reason: format!("invalid URL: {url_str}"),
    })?;

    let access_key = std::env::var(ENV_ACCESS_KEY)
        .ok()
        .or_else(|| profile.access_key.clone())
        .map(SecretString::from);

    let timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));

    let mut api = ApiConfig::new(base_url);
    api.timeout = timeout;
    api.access_key = access_key;
    Ok(api)
}

/// Resolve the named profile from `config`, or build a config purely
/// from the environment when the profile does not exist but
/// `SHOPSYNC_API_URL` is set.
pub fn resolve(config: &Config, profile_name: &str) -> Result<ApiConfig, ConfigError> {
    if let Some(profile) = config.profiles.get(profile_name) {
        return resolve_profile(profile, &config.defaults);
    }

    if std::env::var(ENV_API_URL).is_ok() {
        let env_profile = Profile {
            api_url: String::new(),
            access_key: None,
            timeout: None,
        };
        return resolve_profile(&env_profile, &config.defaults);
    }

    Err(ConfigError::ProfileNotFound {
        name: profile_name.to_owned(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_profiles_from_toml() {
        let (_dir, path) = write_config(
            r#"
            default_profile = "local"

            [profiles.local]
            api_url = "http://localhost:5000"
            access_key = "dev-key"
            "#,
        );

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.default_profile.as_deref(), Some("local"));
        let profile = config.profiles.get("local").unwrap();
        assert_eq!(profile.api_url, "http://localhost:5000");
        assert_eq!(profile.access_key.as_deref(), Some("dev-key"));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.default_profile.as_deref(), Some("default"));
        assert_eq!(config.defaults.timeout, 30);
        assert!(config.profiles.is_empty());
    }

    #[test]
    fn resolves_profile_to_api_config() {
        let profile = Profile {
            api_url: "http://localhost:5000".into(),
            access_key: Some("dev-key".into()),
            timeout: Some(5),
        };

        let api = resolve_profile(&profile, &Defaults::default()).unwrap();
        assert_eq!(api.base_url.as_str(), "http://localhost:5000/");
        assert!(api.access_key.is_some());
        assert_eq!(api.timeout, Duration::from_secs(5));
    }

    #[test]
    fn invalid_url_is_a_validation_error() {
        let profile = Profile {
            api_url: "not a url".into(),
            access_key: None,
            timeout: None,
        };

        let result = resolve_profile(&profile, &Defaults::default());
        assert!(matches!(result, Err(ConfigError::Validation { .. })));
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let config = Config::default();
        let result = resolve(&config, "staging");
        assert!(matches!(result, Err(ConfigError::ProfileNotFound { .. })));
    }

    #[test]
    fn active_profile_prefers_explicit_selection() {
        let config = Config {
            default_profile: Some("local".into()),
            ..Config::default()
        };
        assert_eq!(active_profile_name(Some("staging"), &config), "staging");
        assert_eq!(active_profile_name(None, &config), "local");
    }
}
