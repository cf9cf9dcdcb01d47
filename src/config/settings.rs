//! TOML-based configuration for burnrate.
//!
//! Example configuration:
//! ```toml
//! [output]
//! format = "json"
//!
//! [log]
//! filter = "burnrate=debug"
//!
//! [objectives]
//! paths = ["${SLO_DIR}/checkout.toml", "./objectives/search.json"]
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "BURNRATE_CONFIG";

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub output: OutputSettings,
    pub log: LogSettings,
    pub objectives: ObjectiveSettings,
}

/// How compiled queries are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

/// Logging configuration. `RUST_LOG` takes precedence when set.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSettings {
    /// `tracing_subscriber::EnvFilter` directive.
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

/// Objective files compiled when none are given on the command line.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ObjectiveSettings {
    /// File paths (supports ${ENV_VAR} expansion).
    pub paths: Vec<String>,
}

impl ObjectiveSettings {
    /// Paths with environment variables expanded.
    pub fn resolved_paths(&self) -> Result<Vec<PathBuf>, SettingsError> {
        self.paths
            .iter()
            .map(|path| expand_env_vars(path).map(PathBuf::from))
            .collect()
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `BURNRATE_CONFIG`
    /// 2. `./burnrate.toml`
    /// 3. `~/.config/burnrate/config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var(CONFIG_ENV) {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("burnrate.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("burnrate").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        Ok(Settings::default())
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}` and `$VAR`. A `$` not followed by a name is kept.
pub fn expand_env_vars(s: &str) -> Result<String, SettingsError> {
    let lookup = |name: &str| env::var(name).map_err(|_| SettingsError::MissingEnvVar(name.to_string()));

    let mut result = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(pos) = rest.find('$') {
        result.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(braced) = after.strip_prefix('{') {
            // Unterminated `${` takes the remainder as the name.
            let end = braced.find('}').unwrap_or(braced.len());
            result.push_str(&lookup(&braced[..end])?);
            rest = braced.get(end + 1..).unwrap_or("");
        } else {
            let end = after
                .find(|c: char| !(c.is_alphanumeric() || c == '_'))
                .unwrap_or(after.len());
            if end == 0 {
                result.push('$');
            } else {
                result.push_str(&lookup(&after[..end])?);
            }
            rest = &after[end..];
        }
    }

    result.push_str(rest);
    Ok(result)
}
