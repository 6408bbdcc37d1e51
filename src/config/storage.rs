//! Storage configuration module.
//!
//! This module defines where the dictionary file lives and how it is written.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use crate::storage::ExportMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the tab-separated dictionary file
    pub path: PathBuf,

    /// Write every meaning of a word; `false` writes only the first one
    pub export_all_meanings: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("dictionaries.txt"),
            export_all_meanings: true,
        }
    }
}

impl StorageConfig {
    /// Export mode selected by this configuration.
    pub fn export_mode(&self) -> ExportMode {
        if self.export_all_meanings {
            ExportMode::AllMeanings
        } else {
            ExportMode::PrimaryMeaning
        }
    }
}

impl Validate for StorageConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "storage.path cannot be empty".to_string(),
            ));
        }

        if self.path.is_dir() {
            return Err(ConfigError::ValidationError(format!(
                "storage.path must be a file, got directory {}",
                self.path.display()
            )));
        }

        Ok(())
    }
}
