//! Application configuration.
//!
//! Loaded from `quickshrink.toml` next to where the tool runs. All options
//! are optional — config files are sparse and override just the values you
//! want. Unknown keys are rejected to catch typos early. CLI flags override
//! anything set here.
//!
//! ```toml
//! # Defaults shown below
//!
//! default_level = "balanced"   # high-quality | balanced | small-file | super-small
//! output_dir = "compressed"    # where exported results land
//!
//! [batch]
//! unlocked = false             # allow selecting more than one image
//! ```

use crate::presets::CompressionLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "quickshrink.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `quickshrink.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Compression level used when no `--level` flag is given.
    pub default_level: CompressionLevel,
    /// Export destination directory.
    pub output_dir: String,
    /// Batch-mode gating.
    pub batch: BatchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    /// Whether multi-image selection is unlocked.
    pub unlocked: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_level: CompressionLevel::Balanced,
            output_dir: "compressed".to_string(),
            batch: BatchConfig::default(),
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { unlocked: false }
    }
}

impl AppConfig {
    /// Load from a specific file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `quickshrink.toml` from `dir`, falling back to defaults when
    /// the file does not exist. A present-but-broken file is an error.
    pub fn load_or_default(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.output_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "output_dir must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
