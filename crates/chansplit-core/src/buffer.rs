//! Immutable RGB pixel buffer shared by every pipeline stage.

use image::{DynamicImage, Rgb, RgbImage};

/// A row-major buffer of 8-bit RGB pixels.
///
/// Every coordinate in `[0, width) x [0, height)` holds a value. The buffer
/// carries no alpha and exposes no mutation once constructed; stages that
/// transform pixels build a new buffer instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    image: RgbImage,
}

impl PixelBuffer {
    /// Build a buffer by evaluating `f` at every coordinate.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> [u8; 3],
    {
        Self {
            image: RgbImage::from_fn(width, height, |x, y| Rgb(f(x, y))),
        }
    }

    /// Build a buffer where every pixel has the same color.
    pub fn uniform(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, Rgb(rgb)),
        }
    }

    /// Wrap packed `RGBRGB...` samples.
    ///
    /// Returns `None` if `samples` is not exactly `width * height * 3` long.
    pub fn from_raw(width: u32, height: u32, samples: Vec<u8>) -> Option<Self> {
        RgbImage::from_raw(width, height, samples).map(Self::from)
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Number of pixels, widened so large images cannot overflow.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// True if the buffer holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixel_count() == 0
    }

    /// The `[r, g, b]` value at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Packed samples in row-major `RGBRGB...` order.
    pub fn samples(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Iterate over all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.image.pixels().map(|p| p.0)
    }

    /// Borrow the underlying `image` buffer for encoding.
    pub fn as_rgb_image(&self) -> &RgbImage {
        &self.image
    }
}

impl From<RgbImage> for PixelBuffer {
    fn from(image: RgbImage) -> Self {
        Self { image }
    }
}

/// Converts any decoded image to 8-bit RGB, dropping alpha.
impl From<&DynamicImage> for PixelBuffer {
    fn from(image: &DynamicImage) -> Self {
        Self {
            image: image.to_rgb8(),
        }
    }
}
