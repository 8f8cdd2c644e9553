use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{ReleaseField, TagPattern};
use crate::error::{BumpError, Result};

/// File name looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "pep440bump.toml";

/// Represents the complete configuration for pep440-bump.
///
/// Contains bump defaults, output formatting and behavior options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub bump: BumpConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Defaults applied to bump requests.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BumpConfig {
    /// Release field bumped when a pre-release cycle starts from a final release
    #[serde(default)]
    pub default_field: ReleaseField,
}

/// Returns the default tag pattern: the bare version.
fn default_tag_pattern() -> String {
    "{version}".to_string()
}

/// Configuration for how results are rendered.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,
}

impl OutputConfig {
    pub fn tag_pattern(&self) -> TagPattern {
        TagPattern::new(self.tag_pattern.clone())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            tag_pattern: default_tag_pattern(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Configuration for behavior customization.
///
/// Controls runtime behavior of pep440-bump without affecting version arithmetic.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    #[serde(default = "default_true")]
    pub show_warnings: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            show_warnings: true,
        }
    }
}

/// Parses configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<Config> {
    toml::from_str(content).map_err(|e| BumpError::config(e.to_string()))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `pep440bump.toml` in current directory
/// 3. `~/.config/.pep440bump.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}
