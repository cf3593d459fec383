//! Guided channel split.
//!
//! Walks the user through: source (test image or file) → channel mode →
//! output base name → split, then shows statistics and written files.

use chansplit_core::{ChannelSplitter, Config, OutputMode, SourceImage, SplitOptions};
use console::Style;
use dialoguer::{Input, Select};
use std::path::PathBuf;

use super::theme::{chansplit_theme, print_stats};
use crate::cli::split::validate_base_name;

const SOURCE_ITEMS: &[&str] = &["Load an image file", "Generate the stripe test image"];
const MODE_ITEMS: &[&str] = &[
    "Color (other channels zeroed)",
    "Grayscale (channel intensity as gray)",
];

/// Walk the user through one split.
pub async fn guided_split(config: &Config) -> anyhow::Result<()> {
    let theme = chansplit_theme();
    let splitter = ChannelSplitter::new(config);

    // ── Source ──────────────────────────────────────────────────────────────

    let source_choice = Select::with_theme(&theme)
        .with_prompt("Image source")
        .items(SOURCE_ITEMS)
        .default(0)
        .interact_opt()?;

    let source = match source_choice {
        Some(0) => match prompt_and_load(&theme, &splitter)? {
            Some(source) => source,
            None => return Ok(()),
        },
        Some(_) => splitter.test_image(),
        None => return Ok(()),
    };

    // ── Mode ────────────────────────────────────────────────────────────────

    let default_mode = match config.processing.mode {
        OutputMode::Color => 0,
        OutputMode::Grayscale => 1,
    };
    let mode = match Select::with_theme(&theme)
        .with_prompt("Save channels as")
        .items(MODE_ITEMS)
        .default(default_mode)
        .interact_opt()?
    {
        Some(0) => OutputMode::Color,
        Some(_) => OutputMode::Grayscale,
        None => return Ok(()),
    };

    // ── Base name ───────────────────────────────────────────────────────────

    let Some(base_name) = super::handle_interrupt(
        Input::<String>::with_theme(&theme)
            .with_prompt("Output base name")
            .default(config.output.base_name.clone())
            .validate_with(|input: &String| {
                validate_base_name(input).map_err(|e| e.to_string())
            })
            .interact_text(),
    )?
    else {
        return Ok(());
    };

    // ── Split ───────────────────────────────────────────────────────────────

    let options = SplitOptions {
        mode,
        base_name: base_name.trim().to_string(),
        ..SplitOptions::from_config(config)
    };

    let report = match splitter.split(source, &options).await {
        Ok(report) => report,
        Err(e) => {
            let err = Style::new().for_stderr().red();
            eprintln!("  {} {e}", err.apply_to("✗"));
            return Ok(());
        }
    };

    print_stats(&report.stats);

    let green = Style::new().for_stderr().green();
    for output in &report.outputs {
        eprintln!("  {} Saved {}", green.apply_to("✓"), output.path.display());
    }
    eprintln!();

    Ok(())
}

/// Prompt for an image path until one loads. Returns `Ok(None)` on interrupt.
fn prompt_and_load(
    theme: &dialoguer::theme::ColorfulTheme,
    splitter: &ChannelSplitter,
) -> anyhow::Result<Option<SourceImage>> {
    let warn = Style::new().for_stderr().yellow();
    let dim = Style::new().for_stderr().dim();

    loop {
        let Some(raw_path) = super::handle_interrupt(
            Input::<String>::with_theme(theme)
                .with_prompt("Path to image")
                .allow_empty(true)
                .interact_text(),
        )?
        else {
            return Ok(None);
        };

        let raw_path = raw_path.trim();
        if raw_path.is_empty() {
            eprintln!("  {}", warn.apply_to("Path cannot be empty"));
            continue;
        }

        let path = PathBuf::from(shellexpand::tilde(raw_path).into_owned());
        match splitter.load(&path) {
            Ok(source) => {
                eprintln!("  {}", dim.apply_to(format!("Loaded {}", path.display())));
                return Ok(Some(source));
            }
            Err(e) => {
                eprintln!("  {}", warn.apply_to(e.to_string()));
                eprintln!("  {}", dim.apply_to("Check the path and try again."));
            }
        }
    }
}
