//! The `chansplit split` command.

pub mod types;

pub use types::{Mode, ReportFormat};

use chansplit_core::{ChannelSplitter, Config, OutputFormat, OutputWriter, SplitOptions, SplitReport};
use clap::Args;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Arguments for the `split` command.
#[derive(Args, Debug, Default)]
pub struct SplitArgs {
    /// Image file to split
    #[arg(required_unless_present = "test_image", conflicts_with = "test_image")]
    pub input: Option<PathBuf>,

    /// Split the generated red/green/blue stripe image instead of a file
    #[arg(long)]
    pub test_image: bool,

    /// Channel rendering mode [default: from config, "color"]
    #[arg(short, long, value_enum, ignore_case = true)]
    pub mode: Option<Mode>,

    /// Output file stem: <BASE_NAME>_red.<ext> etc. [default: from config, "test"]
    #[arg(short, long)]
    pub base_name: Option<String>,

    /// Directory for channel images [default: from config, "."]
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Channel image format: png, jpg, jpeg or bmp (others fall back to png)
    #[arg(long)]
    pub image_format: Option<String>,

    /// Report file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report format [default: from config, "json"]
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Extract channels one after another instead of concurrently
    #[arg(long)]
    pub sequential: bool,
}

/// Execute the split command and emit its report.
pub async fn execute(args: SplitArgs, config: &Config) -> anyhow::Result<()> {
    let report = run(&args, config).await?;

    tracing::info!("Channel statistics for {}:\n{}", report.source, report.stats);
    tracing::info!(
        "Wrote {} channel image(s) in {} mode",
        report.outputs.len(),
        report.mode
    );

    let format = args
        .format
        .map(OutputFormat::from)
        .or_else(|| OutputFormat::parse(&config.output.report_format))
        .unwrap_or(OutputFormat::Json);

    if let Some(ref output_path) = args.output {
        let file = File::create(output_path)?;
        let mut writer = OutputWriter::new(BufWriter::new(file), format, config.output.pretty);
        writer.write(&report)?;
        writer.flush()?;
        tracing::info!("Report written to {:?}", output_path);
    } else {
        let mut writer = OutputWriter::new(std::io::stdout().lock(), format, config.output.pretty);
        writer.write(&report)?;
        writer.flush()?;
    }

    Ok(())
}

/// Load the source, then split it with config defaults overridden by `args`.
pub async fn run(args: &SplitArgs, config: &Config) -> anyhow::Result<SplitReport> {
    let options = split_options(args, config)?;
    let splitter = ChannelSplitter::new(config);

    let source = match args.input {
        Some(ref path) if !args.test_image => {
            let path = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());
            splitter.load(&path)?
        }
        _ => splitter.test_image(),
    };

    Ok(splitter.split(source, &options).await?)
}

/// Merge command-line overrides into the configured split options.
pub fn split_options(args: &SplitArgs, config: &Config) -> anyhow::Result<SplitOptions> {
    let mut options = SplitOptions::from_config(config);

    if let Some(mode) = args.mode {
        options.mode = mode.into();
    }
    if let Some(ref base) = args.base_name {
        validate_base_name(base)?;
        options.base_name = base.trim().to_string();
    }
    if let Some(ref dir) = args.out_dir {
        options.out_dir = dir.clone();
    }
    if let Some(ref ext) = args.image_format {
        options.image_format = ext.trim_start_matches('.').to_string();
    }
    if args.sequential {
        options.parallel = false;
    }

    Ok(options)
}

/// A base name must be a non-empty file stem.
pub fn validate_base_name(base: &str) -> anyhow::Result<()> {
    let base = base.trim();
    if base.is_empty() {
        anyhow::bail!("Base name cannot be empty");
    }
    if base.contains(['/', '\\']) {
        anyhow::bail!(
            "Base name '{base}' must not contain path separators\n\n  Hint: use --out-dir to choose the directory."
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chansplit_core::OutputMode;
    use clap::Parser;

    #[derive(Parser)]
    struct SplitCli {
        #[command(flatten)]
        args: SplitArgs,
    }

    fn parse_mode(token: &str) -> Result<Option<Mode>, clap::Error> {
        SplitCli::try_parse_from(["chansplit", "--test-image", "--mode", token])
            .map(|cli| cli.args.mode)
    }

    #[test]
    fn mode_flag_accepts_short_and_mixed_case_tokens() {
        for token in ["color", "colour", "c", "C", "COLOUR", "Color"] {
            assert!(
                matches!(parse_mode(token), Ok(Some(Mode::Color))),
                "token {token}"
            );
        }
        for token in ["grayscale", "greyscale", "gray", "grey", "g", "Grey", "GRAYSCALE"] {
            assert!(
                matches!(parse_mode(token), Ok(Some(Mode::Grayscale))),
                "token {token}"
            );
        }
        assert!(parse_mode("sepia").is_err());
    }

    #[test]
    fn input_and_test_image_conflict() {
        assert!(SplitCli::try_parse_from(["chansplit", "in.png", "--test-image"]).is_err());
        assert!(SplitCli::try_parse_from(["chansplit"]).is_err());
    }

    #[test]
    fn split_args_default_uses_config() {
        let config = Config::default();
        let options = split_options(&SplitArgs::default(), &config).unwrap();
        assert_eq!(options.mode, OutputMode::Color);
        assert_eq!(options.base_name, "test");
        assert_eq!(options.image_format, "png");
        assert!(options.parallel);
    }

    #[test]
    fn split_args_override_config() {
        let args = SplitArgs {
            mode: Some(Mode::Grayscale),
            base_name: Some(" photo ".to_string()),
            out_dir: Some(PathBuf::from("channels")),
            image_format: Some(".jpg".to_string()),
            sequential: true,
            ..SplitArgs::default()
        };
        let options = split_options(&args, &Config::default()).unwrap();
        assert_eq!(options.mode, OutputMode::Grayscale);
        assert_eq!(options.base_name, "photo");
        assert_eq!(options.image_format, "jpg");
        assert!(!options.parallel);
        assert_eq!(
            options.channel_path(chansplit_core::ChannelSelector::Blue),
            PathBuf::from("channels/photo_blue.jpg")
        );
    }

    #[test]
    fn base_name_with_separator_is_rejected() {
        assert!(validate_base_name("out/test").is_err());
        assert!(validate_base_name("   ").is_err());
        assert!(validate_base_name("holiday-2024").is_ok());
    }

    #[tokio::test]
    async fn run_test_image_writes_channels() {
        let dir = tempfile::tempdir().unwrap();
        let args = SplitArgs {
            test_image: true,
            out_dir: Some(dir.path().to_path_buf()),
            ..SplitArgs::default()
        };
        let report = run(&args, &Config::default()).await.unwrap();
        assert_eq!(report.source, "test-image");
        assert!(dir.path().join("test_red.png").is_file());
        assert!(dir.path().join("test_blue.png").is_file());
    }

    #[tokio::test]
    async fn run_missing_input_fails_with_path() {
        let args = SplitArgs {
            input: Some(PathBuf::from("/nonexistent/chansplit/in.png")),
            ..SplitArgs::default()
        };
        let err = run(&args, &Config::default()).await.unwrap_err();
        assert!(err.to_string().contains("in.png"));
    }
}
