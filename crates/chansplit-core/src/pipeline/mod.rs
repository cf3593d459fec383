//! Channel splitting pipeline components.
//!
//! The stages run in a straight line:
//! - **source**: generate the stripe test image or decode a file
//! - **validate**: pre-decode checks on input files
//! - **analyze**: per-channel mean / min / max
//! - **extract**: isolate one channel, in color or grayscale
//! - **sink**: write channel images, normalizing the format by extension
//! - **processor**: orchestrates the full pipeline

pub mod analyze;
pub mod extract;
pub mod processor;
pub mod sink;
pub mod source;
pub mod validate;

// Re-exports for convenient access
pub use analyze::analyze_channels;
pub use extract::{extract_all, extract_channel};
pub use processor::{ChannelSplitter, SourceImage, SplitOptions, TEST_IMAGE_LABEL};
pub use sink::{channel_file_name, resolve_output_path, save_image};
pub use source::{generate_test_image, load_image, striped_image, ImageLoader, LoadedImage};
pub use validate::Validator;
