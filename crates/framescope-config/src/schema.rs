//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub extract: ExtractConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Extraction settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Post URL used when neither the page nor the command line gives one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// How extracted frames are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The frame as a JSON object.
    #[default]
    Json,
    /// The frame re-rendered as `<meta>` tags.
    Html,
    /// One `key<TAB>content` line per declaration.
    Flat,
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is not set.
    #[serde(default = "default_level")]
    pub level: String,

    /// Directory for rolling log files. Console-only when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            directory: None,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}
