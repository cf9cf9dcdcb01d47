//! Configuration module for burnrate.
//!
//! Handles the config file, environment variable expansion and settings.

mod settings;

pub use settings::{
    expand_env_vars, LogSettings, ObjectiveSettings, OutputFormat, OutputSettings, Settings,
    SettingsError, CONFIG_ENV,
};
