//! Core data types for the channel splitting pipeline.
//!
//! These types name the channel being isolated, how it is rendered, and the
//! statistics and file list produced by a run.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// One of the three 8-bit color components of a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelSelector {
    Red,
    Green,
    Blue,
}

impl ChannelSelector {
    /// All channels in output order.
    pub const ALL: [ChannelSelector; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Position of this component inside an `[r, g, b]` pixel.
    pub fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }

    /// Lowercase name used in output file names.
    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }
}

impl fmt::Display for ChannelSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How an extracted channel is rendered.
///
/// Deserializes through [`FromStr`], so config files accept the same
/// case-insensitive short forms as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OutputMode {
    /// Keep the selected component, zero the other two
    #[default]
    Color,
    /// Replicate the selected component into all three
    Grayscale,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color => f.write_str("color"),
            Self::Grayscale => f.write_str("grayscale"),
        }
    }
}

impl FromStr for OutputMode {
    type Err = String;

    /// Parse a mode name (case-insensitive, accepts short forms).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "color" | "colour" | "c" => Ok(Self::Color),
            "grayscale" | "greyscale" | "gray" | "grey" | "g" => Ok(Self::Grayscale),
            other => Err(format!(
                "unknown output mode '{other}' (expected 'color' or 'grayscale')"
            )),
        }
    }
}

impl TryFrom<String> for OutputMode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Summary statistics for one channel over all pixels of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelStats {
    pub mean: f64,
    pub min: u8,
    pub max: u8,
}

/// Per-channel statistics for a whole buffer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelReport {
    pub red: ChannelStats,
    pub green: ChannelStats,
    pub blue: ChannelStats,
}

impl ChannelReport {
    /// Statistics for a single channel.
    pub fn get(&self, channel: ChannelSelector) -> &ChannelStats {
        match channel {
            ChannelSelector::Red => &self.red,
            ChannelSelector::Green => &self.green,
            ChannelSelector::Blue => &self.blue,
        }
    }
}

/// Renders a fixed-width table: channel, mean (one decimal), min, max.
impl fmt::Display for ChannelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<7} | {:>7} | {:>3} | {:>3}", "Channel", "Mean", "Min", "Max")?;
        writeln!(f, "{:-<7}-+-{:-<7}-+-{:-<3}-+-{:-<3}", "", "", "", "")?;
        for channel in ChannelSelector::ALL {
            let stats = self.get(channel);
            writeln!(
                f,
                "{:<7} | {:>7.1} | {:>3} | {:>3}",
                channel.name(),
                stats.mean,
                stats.min,
                stats.max
            )?;
        }
        Ok(())
    }
}

/// A channel image written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedChannel {
    pub channel: ChannelSelector,
    /// Path actually written, after extension normalization
    pub path: PathBuf,
}

/// The complete output of splitting one image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitReport {
    /// Input file path, or `test-image` for the generated stripes
    pub source: String,

    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Whether the source format carried an alpha channel (never propagated)
    pub has_alpha: bool,

    /// How channel images were rendered
    pub mode: OutputMode,

    /// Per-channel statistics of the source image
    pub stats: ChannelReport,

    /// Written channel images, in red, green, blue order
    pub outputs: Vec<SavedChannel>,
}
