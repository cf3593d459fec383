//! Writing channel images to disk.
//!
//! The output format follows the file extension when it is one of png, jpg,
//! jpeg or bmp (any case). Anything else is written as PNG and the path is
//! rewritten to end in `.png`.

use image::ImageFormat;
use std::path::{Path, PathBuf};

use crate::buffer::PixelBuffer;
use crate::error::PipelineError;
use crate::types::ChannelSelector;

/// Map a file extension to an output format, if it is one we write.
pub fn format_for_extension(ext: &str) -> Option<ImageFormat> {
    match ext.to_ascii_lowercase().as_str() {
        "png" => Some(ImageFormat::Png),
        "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
        "bmp" => Some(ImageFormat::Bmp),
        _ => None,
    }
}

/// Decide where and how a buffer requested at `path` is written.
///
/// Supported extensions keep the path as given. Unsupported extensions are
/// replaced by `.png`, and a missing extension gets `.png` appended.
pub fn resolve_output_path(path: &Path) -> (PathBuf, ImageFormat) {
    let format = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(format_for_extension);

    match format {
        Some(format) => (path.to_path_buf(), format),
        None => (path.with_extension("png"), ImageFormat::Png),
    }
}

/// File name for one channel image: `<base>_<channel>.<ext>`.
pub fn channel_file_name(base: &str, channel: ChannelSelector, ext: &str) -> String {
    format!("{}_{}.{}", base, channel.name(), ext)
}

/// Encode `buffer` to `path` using the extension policy above.
///
/// Creates missing parent directories. Returns the path actually written.
pub fn save_image(buffer: &PixelBuffer, path: impl AsRef<Path>) -> Result<PathBuf, PipelineError> {
    let (path, format) = resolve_output_path(path.as_ref());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PipelineError::Save {
            path: path.clone(),
            message: format!("Cannot create directory {}: {}", parent.display(), e),
        })?;
    }

    buffer
        .as_rgb_image()
        .save_with_format(&path, format)
        .map_err(|e| PipelineError::Save {
            path: path.clone(),
            message: e.to_string(),
        })?;

    tracing::info!("Saved {}", path.display());
    Ok(path)
}
