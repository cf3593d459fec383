//! CLI enum types for the split command: channel mode and report format.

use chansplit_core::{OutputFormat as CoreOutputFormat, OutputMode};
use clap::ValueEnum;

/// How channel images are rendered.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Mode {
    /// Keep the channel, zero the other two
    #[value(alias = "colour", alias = "c")]
    Color,
    /// Channel intensity as a gray image
    #[value(alias = "gray", alias = "greyscale", alias = "grey", alias = "g")]
    Grayscale,
}

impl From<Mode> for OutputMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Color => OutputMode::Color,
            Mode::Grayscale => OutputMode::Grayscale,
        }
    }
}

/// Report formats.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    /// Single JSON object
    Json,
    /// One JSON object per line (newline-delimited)
    Jsonl,
}

impl From<ReportFormat> for CoreOutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Json => CoreOutputFormat::Json,
            ReportFormat::Jsonl => CoreOutputFormat::JsonLines,
        }
    }
}
