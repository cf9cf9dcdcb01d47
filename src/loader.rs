//! Objective definition files.
//!
//! A file holds either a single objective at the top level or a list under
//! `objectives`. TOML and JSON share the same shape:
//!
//! ```toml
//! [[objectives]]
//! name = "checkout-availability"
//! window = "28d"
//! target = 99.9
//!
//! [objectives.indicator.http]
//! selectors = ['job="checkout"']
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::model::Objective;

/// Error type for loading objective files.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML objectives: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON objectives: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported objective file extension: {0}")]
    UnsupportedFormat(PathBuf),
}

/// Objective file syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Json,
}

impl FileFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "toml" => Some(FileFormat::Toml),
            "json" => Some(FileFormat::Json),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct ObjectiveList {
    objectives: Vec<Objective>,
}

/// Key marking a multi-objective file.
const LIST_KEY: &str = "objectives";

/// Parse objectives from source text.
pub fn parse_objectives(source: &str, format: FileFormat) -> Result<Vec<Objective>, LoadError> {
    match format {
        FileFormat::Toml => {
            let table: toml::Table = toml::from_str(source)?;
            if table.contains_key(LIST_KEY) {
                let list: ObjectiveList = toml::Value::Table(table).try_into()?;
                Ok(list.objectives)
            } else {
                Ok(vec![toml::Value::Table(table).try_into()?])
            }
        }
        FileFormat::Json => {
            let value: serde_json::Value = serde_json::from_str(source)?;
            if value.get(LIST_KEY).is_some() {
                let list: ObjectiveList = serde_json::from_value(value)?;
                Ok(list.objectives)
            } else {
                Ok(vec![serde_json::from_value(value)?])
            }
        }
    }
}

/// Load objectives from a `.toml` or `.json` file.
pub fn load_objectives<P: AsRef<Path>>(path: P) -> Result<Vec<Objective>, LoadError> {
    let path = path.as_ref();
    let format =
        FileFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;

    let source = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let objectives = parse_objectives(&source, format)?;
    tracing::debug!(path = %path.display(), count = objectives.len(), "loaded objectives");
    Ok(objectives)
}
