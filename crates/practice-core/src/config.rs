//! Configuration for the report and the celebration overlay.
//!
//! Every field has a default, so an empty or partial TOML file is valid.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PracticeConfig {
    pub report: ReportSettings,
    pub celebration: CelebrationSettings,
}

impl PracticeConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Loads configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be read and a config error if it
    /// is not valid TOML for this schema.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "Loaded practice log configuration");
        Ok(config)
    }
}

/// Labels and file metadata for the exported report.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ReportSettings {
    pub title: String,
    pub signature_label: String,
    pub filename_prefix: String,
    pub file_extension: String,
    pub mime_type: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            title: "WEEKLY PRACTICE LOG".to_string(),
            signature_label: "Parent Signature".to_string(),
            filename_prefix: "practice-log".to_string(),
            file_extension: "xls".to_string(),
            mime_type: "application/vnd.ms-excel".to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CelebrationSettings {
    pub enabled: bool,
    pub dismiss_after_ms: u64,
}

impl Default for CelebrationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            dismiss_after_ms: 3000,
        }
    }
}

impl CelebrationSettings {
    pub fn dismiss_after(&self) -> Duration {
        Duration::from_millis(self.dismiss_after_ms)
    }
}
