//! Pipeline orchestration: source, analyze, extract, save.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use crate::buffer::PixelBuffer;
use crate::config::{Config, TestImageConfig};
use crate::error::PipelineError;
use crate::types::{ChannelSelector, OutputMode, SavedChannel, SplitReport};

use super::analyze::analyze_channels;
use super::extract::extract_channel;
use super::sink::{channel_file_name, save_image};
use super::source::{format_to_string, striped_image, ImageLoader};
use super::validate::Validator;

/// Label used in reports for the generated stripe image.
pub const TEST_IMAGE_LABEL: &str = "test-image";

/// An image ready to be split.
#[derive(Debug)]
pub struct SourceImage {
    /// Where the pixels came from (file path or [`TEST_IMAGE_LABEL`])
    pub label: String,
    pub buffer: PixelBuffer,
    /// Whether the source format carried alpha
    pub has_alpha: bool,
}

/// Options for one split run.
#[derive(Debug, Clone)]
pub struct SplitOptions {
    /// How channel images are rendered
    pub mode: OutputMode,
    /// Stem of the output file names
    pub base_name: String,
    /// Directory the channel images are written to
    pub out_dir: PathBuf,
    /// Requested extension; normalized by the sink
    pub image_format: String,
    /// Run the three extract-and-save jobs concurrently
    pub parallel: bool,
}

impl SplitOptions {
    /// Options taken from the `[processing]` and `[output]` config sections.
    pub fn from_config(config: &Config) -> Self {
        Self {
            mode: config.processing.mode,
            base_name: config.output.base_name.clone(),
            out_dir: config.output_dir(),
            image_format: config.output.image_format.clone(),
            parallel: config.processing.parallel,
        }
    }

    /// Requested path for one channel image, before extension normalization.
    pub fn channel_path(&self, channel: ChannelSelector) -> PathBuf {
        self.out_dir
            .join(channel_file_name(&self.base_name, channel, &self.image_format))
    }
}

/// Splits images into per-channel images and reports statistics.
pub struct ChannelSplitter {
    loader: ImageLoader,
    validator: Validator,
    test_image: TestImageConfig,
}

impl ChannelSplitter {
    /// Create a new splitter with the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            loader: ImageLoader::new(config.limits.clone()),
            validator: Validator::new(config.limits.clone()),
            test_image: config.test_image.clone(),
        }
    }

    /// Validate and decode an image file.
    pub fn load(&self, path: &Path) -> Result<SourceImage, PipelineError> {
        let start = Instant::now();
        let sniffed = self.validator.validate(path)?;
        tracing::trace!("  Validate: {:?} ({})", start.elapsed(), sniffed);

        let decode_start = Instant::now();
        let loaded = self.loader.load(path)?;
        tracing::trace!("  Decode: {:?}", decode_start.elapsed());

        tracing::info!(
            "Loaded {} ({}x{}, {}, {})",
            path.display(),
            loaded.width,
            loaded.height,
            format_to_string(loaded.format),
            if loaded.has_alpha {
                "with alpha channel"
            } else {
                "no alpha channel"
            }
        );

        Ok(SourceImage {
            label: path.display().to_string(),
            buffer: loaded.buffer,
            has_alpha: loaded.has_alpha,
        })
    }

    /// The stripe test image at the configured size.
    pub fn test_image(&self) -> SourceImage {
        let buffer = striped_image(self.test_image.width, self.test_image.height);
        tracing::info!(
            "Generated {}x{} stripe test image",
            buffer.width(),
            buffer.height()
        );
        SourceImage {
            label: TEST_IMAGE_LABEL.to_string(),
            buffer,
            has_alpha: false,
        }
    }

    /// Analyze `source`, then extract and save its three channels.
    ///
    /// Fails with [`PipelineError::EmptyImage`] before writing anything if the
    /// source has no pixels. Outputs are reported in red, green, blue order
    /// whether or not the jobs ran concurrently.
    pub async fn split(
        &self,
        source: SourceImage,
        options: &SplitOptions,
    ) -> Result<SplitReport, PipelineError> {
        let start = Instant::now();
        tracing::debug!("Splitting {} ({} mode)", source.label, options.mode);

        let stats = analyze_channels(&source.buffer)?;
        tracing::trace!("  Analyze: {:?}", start.elapsed());

        let (width, height) = (source.buffer.width(), source.buffer.height());
        let buffer = Arc::new(source.buffer);

        let save_start = Instant::now();
        let outputs = if options.parallel {
            Self::extract_parallel(buffer, options).await?
        } else {
            ChannelSelector::ALL
                .into_iter()
                .map(|channel| {
                    extract_and_save(&buffer, channel, options.mode, &options.channel_path(channel))
                })
                .collect::<Result<Vec<_>, _>>()?
        };
        tracing::trace!("  Extract + save: {:?}", save_start.elapsed());

        tracing::debug!(
            "Split {} in {:?} ({}x{})",
            source.label,
            start.elapsed(),
            width,
            height
        );

        Ok(SplitReport {
            source: source.label,
            width,
            height,
            has_alpha: source.has_alpha,
            mode: options.mode,
            stats,
            outputs,
        })
    }

    /// Run one blocking extract-and-save job per channel.
    ///
    /// Every job is awaited before returning, so no write is still in flight
    /// once this resolves. On failure the first error (in red, green, blue
    /// order) is returned and the channels that succeeded stay on disk.
    async fn extract_parallel(
        buffer: Arc<PixelBuffer>,
        options: &SplitOptions,
    ) -> Result<Vec<SavedChannel>, PipelineError> {
        let handles: Vec<_> = ChannelSelector::ALL
            .into_iter()
            .map(|channel| {
                let buffer = Arc::clone(&buffer);
                let mode = options.mode;
                let path = options.channel_path(channel);
                let handle = tokio::task::spawn_blocking(move || {
                    extract_and_save(&buffer, channel, mode, &path)
                });
                (options.channel_path(channel), handle)
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for (path, handle) in handles {
            let result = handle.await.unwrap_or_else(|e| {
                Err(PipelineError::Save {
                    path,
                    message: format!("Task join error: {}", e),
                })
            });
            results.push(result);
        }
        results.into_iter().collect()
    }
}

fn extract_and_save(
    buffer: &PixelBuffer,
    channel: ChannelSelector,
    mode: OutputMode,
    path: &Path,
) -> Result<SavedChannel, PipelineError> {
    let extracted = extract_channel(buffer, channel, mode);
    let path = save_image(&extracted, path)?;
    Ok(SavedChannel { channel, path })
}
