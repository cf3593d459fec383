//! Interactive mode: guided prompts for a bare `chansplit` invocation.
//!
//! Runs when no subcommand is given and stdin is a terminal. The guided
//! flow uses the same core pipeline as `chansplit split`.

pub mod split;
pub mod theme;

use chansplit_core::Config;
use console::Style;
use dialoguer::Select;

/// Convert a dialoguer result into `Ok(Some(value))` on success, `Ok(None)` on
/// interrupt (Ctrl+C / terminal disconnect), and `Err` for other I/O failures.
fn handle_interrupt<T>(result: dialoguer::Result<T>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

const MENU_ITEMS: &[&str] = &["Split an image into channels", "Show configuration", "Exit"];

/// Entry point for interactive mode.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    theme::print_banner();

    let theme = theme::chansplit_theme();

    loop {
        let selection = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(MENU_ITEMS)
            .default(0)
            .interact_opt()?;

        match selection {
            Some(0) => split::guided_split(config).await?,
            Some(1) => show_config(config),
            _ => break, // Exit or Esc / Ctrl+C
        }
    }

    Ok(())
}

/// Print a short summary of the settings the guided flow starts from.
fn show_config(config: &Config) {
    let label = Style::new().for_stderr().bold();
    let dim = Style::new().for_stderr().dim();

    let config_path = Config::default_path();
    let path_note = if config_path.exists() {
        "(exists)"
    } else {
        "(using defaults)"
    };

    eprintln!();
    eprintln!(
        "    {:<16} {} {}",
        label.apply_to("Config file:"),
        config_path.display(),
        dim.apply_to(path_note)
    );
    eprintln!(
        "    {:<16} {}",
        label.apply_to("Mode:"),
        config.processing.mode
    );
    eprintln!(
        "    {:<16} {}_<channel>.{}",
        label.apply_to("Output files:"),
        config.output.base_name,
        config.output.image_format
    );
    eprintln!(
        "    {:<16} {}",
        label.apply_to("Output dir:"),
        config.output_dir().display()
    );
    eprintln!(
        "    {:<16} {}x{}",
        label.apply_to("Test image:"),
        config.test_image.width,
        config.test_image.height
    );
    eprintln!(
        "    {:<16} {}",
        label.apply_to("Parallel:"),
        if config.processing.parallel { "yes" } else { "no" }
    );
    eprintln!();
}
