//! Image sources: the generated stripe test image and file decoding.

use image::{DynamicImage, ImageFormat};
use std::path::Path;

use crate::buffer::PixelBuffer;
use crate::config::LimitsConfig;
use crate::error::PipelineError;

/// Width of the stripe test image.
pub const TEST_IMAGE_WIDTH: u32 = 300;
/// Height of the stripe test image.
pub const TEST_IMAGE_HEIGHT: u32 = 200;

const RED: [u8; 3] = [255, 0, 0];
const GREEN: [u8; 3] = [0, 255, 0];
const BLUE: [u8; 3] = [0, 0, 255];

/// The fixed 300x200 red / green / blue stripe image.
pub fn generate_test_image() -> PixelBuffer {
    striped_image(TEST_IMAGE_WIDTH, TEST_IMAGE_HEIGHT)
}

/// Three equal vertical stripes of pure red, green and blue.
///
/// Stripe boundaries use integer division: red for `x < w/3`, green for
/// `w/3 <= x < 2w/3`, blue for the rest.
pub fn striped_image(width: u32, height: u32) -> PixelBuffer {
    let first = u64::from(width) / 3;
    let second = 2 * u64::from(width) / 3;
    PixelBuffer::from_fn(width, height, |x, _| {
        let x = u64::from(x);
        if x < first {
            RED
        } else if x < second {
            GREEN
        } else {
            BLUE
        }
    })
}

/// Result of decoding an image file.
#[derive(Debug)]
pub struct LoadedImage {
    /// Decoded pixels converted to 8-bit RGB
    pub buffer: PixelBuffer,
    /// Detected image format
    pub format: ImageFormat,
    /// Whether the source carried an alpha channel (informational only)
    pub has_alpha: bool,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// File size in bytes
    pub file_size: u64,
}

/// Decode an image file without dimension limits.
pub fn load_image(path: &Path) -> Result<LoadedImage, PipelineError> {
    let bytes = std::fs::read(path).map_err(|e| PipelineError::Decode {
        path: path.to_path_buf(),
        message: format!("Cannot read file: {}", e),
    })?;
    ImageLoader::decode_bytes(bytes, path)
}

/// Image decoder with configurable dimension limits.
pub struct ImageLoader {
    limits: LimitsConfig,
}

impl ImageLoader {
    /// Create a new loader with the given limits.
    pub fn new(limits: LimitsConfig) -> Self {
        Self { limits }
    }

    /// Decode an image file, rejecting images larger than the configured limit.
    pub fn load(&self, path: &Path) -> Result<LoadedImage, PipelineError> {
        let loaded = load_image(path)?;
        let max_dim = self.limits.max_image_dimension;
        if loaded.width > max_dim || loaded.height > max_dim {
            return Err(PipelineError::ImageTooLarge {
                path: path.to_path_buf(),
                width: loaded.width,
                height: loaded.height,
                max_dim,
            });
        }
        Ok(loaded)
    }

    /// Decode from bytes, detecting the format by content first and by extension second.
    fn decode_bytes(bytes: Vec<u8>, path: &Path) -> Result<LoadedImage, PipelineError> {
        use std::io::Cursor;

        let file_size = bytes.len() as u64;
        let mut reader = image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| PipelineError::Decode {
                path: path.to_path_buf(),
                message: format!("Cannot detect image format: {}", e),
            })?;
        let format = match reader.format() {
            Some(f) => f,
            None => ImageFormat::from_path(path).map_err(|_| PipelineError::UnsupportedFormat {
                path: path.to_path_buf(),
                format: path
                    .extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or("unknown")
                    .to_string(),
            })?,
        };
        reader.set_format(format);
        let image: DynamicImage = reader.decode().map_err(|e| PipelineError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let has_alpha = image.color().has_alpha();
        let buffer = PixelBuffer::from(&image);
        tracing::debug!(
            "Decoded {:?}: {}x{} {} ({})",
            path,
            buffer.width(),
            buffer.height(),
            format_to_string(format),
            if has_alpha { "with alpha" } else { "no alpha" }
        );

        Ok(LoadedImage {
            width: buffer.width(),
            height: buffer.height(),
            buffer,
            format,
            has_alpha,
            file_size,
        })
    }
}

/// Convert an ImageFormat to a string representation.
pub fn format_to_string(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Jpeg => "jpeg",
        ImageFormat::Png => "png",
        ImageFormat::WebP => "webp",
        ImageFormat::Gif => "gif",
        ImageFormat::Tiff => "tiff",
        ImageFormat::Bmp => "bmp",
        _ => "unknown",
    }
}
