use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::constants::DEFAULT_DROP_COLUMNS;
use crate::error::{CleanerError, Result};
use crate::pipeline::normalize::normalize_name;

/// CLI-side configuration. The pipeline itself never reads this; it
/// takes the dropped-column set as an explicit parameter so every call
/// stays reentrant and testable with varying configurations.
#[derive(Debug, Clone, Deserialize)]
pub struct CleanConfig {
    /// Columns to always drop. Entries may be written in raw header
    /// form ("Unnamed: 0"); they are normalized before reaching the
    /// pipeline.
    #[serde(default = "default_drop_columns")]
    pub drop_columns: Vec<String>,
}

fn default_drop_columns() -> Vec<String> {
    DEFAULT_DROP_COLUMNS.iter().map(|s| s.to_string()).collect()
}

impl Default for CleanConfig {
    fn default() -> Self {
        CleanConfig {
            drop_columns: default_drop_columns(),
        }
    }
}

impl CleanConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CleanerError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: CleanConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// The normalized drop set handed to the pipeline.
    pub fn drop_set(&self) -> HashSet<String> {
        self.drop_columns
            .iter()
            .map(|name| normalize_name(name))
            .collect()
    }
}
