//! chansplit CLI - split an image into red, green and blue channel images.
//!
//! Each channel is written as its own image, either in color (other channels
//! zeroed) or as grayscale intensity, and per-channel statistics are reported
//! as JSON.
//!
//! # Usage
//!
//! ```bash
//! # Split a photo into photo_red.png, photo_green.png, photo_blue.png
//! chansplit split photo.jpg --base-name photo
//!
//! # Grayscale channels from the generated stripe image
//! chansplit split --test-image --mode grayscale
//!
//! # Guided mode
//! chansplit
//! ```

use clap::{CommandFactory, Parser, Subcommand};
use std::io::IsTerminal;

mod cli;
mod logging;

/// chansplit - split an image into its red, green and blue channels.
#[derive(Parser, Debug)]
#[command(name = "chansplit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    /// Runs interactive mode when omitted on a terminal
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Split an image (or the stripe test image) into channel images
    Split(cli::split::SplitArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so config warnings go through eprintln.
    let config = match chansplit_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `chansplit config path`."
            );
            chansplit_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("chansplit v{}", chansplit_core::VERSION);

    match cli.command {
        Some(Commands::Split(args)) => cli::split::execute(args, &config).await,
        Some(Commands::Config(args)) => cli::config::execute(args, &config),
        None if std::io::stdin().is_terminal() => cli::interactive::run(&config).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
