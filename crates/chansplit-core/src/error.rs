//! Error types for the channel splitting pipeline.
//!
//! Errors are organized by stage so that every failure at an I/O boundary
//! carries the file path and the underlying cause. Extraction itself never
//! fails; analysis fails only on an empty buffer.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for chansplit operations.
#[derive(Error, Debug)]
pub enum ChansplitError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pipeline processing errors
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Pipeline errors, organized by stage.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The file could not be read or decoded
    #[error("Decode error for {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// Unsupported image format
    #[error("Unsupported format for {path}: {format}")]
    UnsupportedFormat { path: PathBuf, format: String },

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File exceeds size limit
    #[error("File too large: {path} ({size_mb}MB > {max_mb}MB)")]
    FileTooLarge {
        path: PathBuf,
        size_mb: u64,
        max_mb: u64,
    },

    /// Image dimensions exceed limit
    #[error("Image too large: {path} ({width}x{height} > {max_dim})")]
    ImageTooLarge {
        path: PathBuf,
        width: u32,
        height: u32,
        max_dim: u32,
    },

    /// A buffer with no pixels reached the statistics pass
    #[error("Cannot analyze an empty image ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    /// Encoding or writing an output image failed
    #[error("Save error for {path}: {message}")]
    Save { path: PathBuf, message: String },
}

/// Convenience type alias for chansplit results.
pub type Result<T> = std::result::Result<T, ChansplitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_mentions_path() {
        let err = PipelineError::Decode {
            path: PathBuf::from("photo.png"),
            message: "corrupt header".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("photo.png"));
        assert!(msg.contains("corrupt header"));
    }

    #[test]
    fn test_pipeline_error_converts_to_top_level() {
        let err: ChansplitError = PipelineError::EmptyImage {
            width: 0,
            height: 10,
        }
        .into();
        assert!(matches!(
            err,
            ChansplitError::Pipeline(PipelineError::EmptyImage { .. })
        ));
        assert!(err.to_string().contains("0x10"));
    }
}
