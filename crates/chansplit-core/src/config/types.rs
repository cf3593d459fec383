//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::types::OutputMode;

/// Processing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Channel rendering mode when none is given on the command line
    pub mode: OutputMode,

    /// Extract and save the three channels concurrently
    pub parallel: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            mode: OutputMode::Color,
            parallel: true,
        }
    }
}

/// Resource limits to protect against problematic inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum file size in megabytes
    pub max_file_size_mb: u64,

    /// Maximum image dimension (width or height)
    pub max_image_dimension: u32,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: 100,
            max_image_dimension: 10000,
        }
    }
}

/// Size of the generated stripe test image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TestImageConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for TestImageConfig {
    fn default() -> Self {
        Self {
            width: crate::pipeline::source::TEST_IMAGE_WIDTH,
            height: crate::pipeline::source::TEST_IMAGE_HEIGHT,
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Stem for channel files: `<base_name>_red.<ext>` etc.
    pub base_name: String,

    /// Directory channel images are written to
    pub directory: PathBuf,

    /// Channel image format ("png", "jpg", "jpeg" or "bmp"; others fall back to png)
    pub image_format: String,

    /// Report format ("json" or "jsonl")
    pub report_format: String,

    /// Pretty-print JSON reports
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            base_name: "test".to_string(),
            directory: PathBuf::from("."),
            image_format: "png".to_string(),
            report_format: "json".to_string(),
            pretty: true,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
