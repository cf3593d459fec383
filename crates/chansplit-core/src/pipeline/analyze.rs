//! Per-channel summary statistics.

use crate::buffer::PixelBuffer;
use crate::error::PipelineError;
use crate::types::{ChannelReport, ChannelStats};

/// Running min / max / sum for one channel.
#[derive(Clone, Copy)]
struct ChannelAccumulator {
    sum: u64,
    min: u8,
    max: u8,
}

impl ChannelAccumulator {
    fn new() -> Self {
        Self {
            sum: 0,
            min: u8::MAX,
            max: u8::MIN,
        }
    }

    fn add(&mut self, value: u8) {
        self.sum += u64::from(value);
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    fn build(self, count: u64) -> ChannelStats {
        ChannelStats {
            mean: self.sum as f64 / count as f64,
            min: self.min,
            max: self.max,
        }
    }
}

/// Compute mean, min and max of each channel in a single pass.
///
/// Returns [`PipelineError::EmptyImage`] for a buffer with no pixels, since
/// the mean is undefined there.
pub fn analyze_channels(buffer: &PixelBuffer) -> Result<ChannelReport, PipelineError> {
    if buffer.is_empty() {
        return Err(PipelineError::EmptyImage {
            width: buffer.width(),
            height: buffer.height(),
        });
    }

    let mut acc = [ChannelAccumulator::new(); 3];
    for px in buffer.samples().chunks_exact(3) {
        for (channel, &value) in acc.iter_mut().zip(px) {
            channel.add(value);
        }
    }

    let count = buffer.pixel_count();
    let [red, green, blue] = acc.map(|a| a.build(count));
    Ok(ChannelReport { red, green, blue })
}
