//! The `chansplit config` command for configuration management.

use clap::{Args, Subcommand};
use chansplit_core::Config;
use std::path::{Path, PathBuf};

/// Arguments for the `config` command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Subcommands for configuration management.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration
    Show,

    /// Show config file path
    Path,

    /// Write a config file with defaults
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Parse and validate a config file without using it
    Check {
        /// File to check (defaults to the standard location)
        file: Option<PathBuf>,
    },
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, config: &Config) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => println!("{}", config.to_toml()?),
        ConfigCommand::Path => println!("{}", Config::default_path().display()),
        ConfigCommand::Init { force } => {
            let path = Config::default_path();
            init(&path, force)?;
            tracing::info!("Config file created at: {}", path.display());
            println!("Configuration initialized at: {}", path.display());
        }
        ConfigCommand::Check { file } => {
            let path = file.unwrap_or_else(Config::default_path);
            Config::load_from(&path)?;
            println!("{}: ok", path.display());
        }
    }

    Ok(())
}

/// Write the default configuration to `path`, refusing to clobber unless `force`.
fn init(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at: {}\nUse --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, Config::default().to_toml()?)?;
    Ok(())
}
