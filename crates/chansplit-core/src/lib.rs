//! chansplit core - split images into red, green and blue channel images.
//!
//! The library loads an image (or generates a striped test image), computes
//! per-channel statistics, and writes one image per color channel, either
//! with the other channels zeroed or as a grayscale intensity map.
//!
//! # Architecture
//!
//! ```text
//! Source (decode / stripes) → Analyze → Extract ×3 → Save ×3 → SplitReport
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use chansplit_core::{ChannelSplitter, Config, SplitOptions};
//!
//! #[tokio::main]
//! async fn main() -> chansplit_core::Result<()> {
//!     let config = Config::load()?;
//!     let splitter = ChannelSplitter::new(&config);
//!
//!     let source = splitter.load("./photo.jpg".as_ref())?;
//!     let report = splitter.split(source, &SplitOptions::from_config(&config)).await?;
//!     println!("{}", report.stats);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod buffer;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod types;

// Re-exports for convenient access
pub use buffer::PixelBuffer;
pub use config::Config;
pub use error::{ChansplitError, ConfigError, PipelineError, Result};
pub use output::{OutputFormat, OutputWriter};
pub use pipeline::{ChannelSplitter, SourceImage, SplitOptions};
pub use types::{ChannelReport, ChannelSelector, ChannelStats, OutputMode, SavedChannel, SplitReport};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
