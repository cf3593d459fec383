//! Channel extraction: isolate one 8-bit component of every pixel.

use crate::buffer::PixelBuffer;
use crate::types::{ChannelSelector, OutputMode};

/// Build a new buffer holding only the `selector` component of `buffer`.
///
/// In [`OutputMode::Color`] the selected component passes through unchanged
/// and the other two are zeroed. In [`OutputMode::Grayscale`] the selected
/// component is copied into all three, giving a neutral gray.
///
/// The output has the same dimensions as the input; empty buffers give
/// empty buffers.
pub fn extract_channel(
    buffer: &PixelBuffer,
    selector: ChannelSelector,
    mode: OutputMode,
) -> PixelBuffer {
    let index = selector.index();
    let mut out = buffer.as_rgb_image().clone();

    for px in out.chunks_exact_mut(3) {
        let value = px[index];
        match mode {
            OutputMode::Color => {
                px.fill(0);
                px[index] = value;
            }
            OutputMode::Grayscale => px.fill(value),
        }
    }

    PixelBuffer::from(out)
}

/// Extract all three channels in red, green, blue order.
pub fn extract_all(buffer: &PixelBuffer, mode: OutputMode) -> [(ChannelSelector, PixelBuffer); 3] {
    ChannelSelector::ALL.map(|selector| (selector, extract_channel(buffer, selector, mode)))
}
