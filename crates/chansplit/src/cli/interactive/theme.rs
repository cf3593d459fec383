//! Dialoguer theme, banner and statistics table for interactive mode.

use chansplit_core::{ChannelReport, ChannelSelector};
use console::{style, Style};
use dialoguer::theme::ColorfulTheme;

/// `ColorfulTheme` with cyan prompts and green/red result markers.
pub fn chansplit_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("?".to_string()).for_stderr().cyan(),
        prompt_style: Style::new().for_stderr().bold(),
        prompt_suffix: style("›".to_string()).for_stderr().bright().black(),
        active_item_prefix: style("▸".to_string()).for_stderr().cyan(),
        active_item_style: Style::new().for_stderr().cyan(),
        success_prefix: style("✓".to_string()).for_stderr().green(),
        error_prefix: style("✗".to_string()).for_stderr().red(),
        error_style: Style::new().for_stderr().red(),
        values_style: Style::new().for_stderr().green(),
        ..ColorfulTheme::default()
    }
}

/// Prints the version banner to stderr.
pub fn print_banner() {
    let version_line = format!("chansplit v{}", chansplit_core::VERSION);
    let tagline = "RGB channel extraction";
    let inner_width = version_line.len().max(tagline.len()) + 4;

    let cyan = Style::new().for_stderr().cyan();
    eprintln!();
    eprintln!("{}", cyan.apply_to(format!("  ╔{:═<inner_width$}╗", "")));
    eprintln!("{}", cyan.apply_to(format!("  ║{version_line:^inner_width$}║")));
    eprintln!("{}", cyan.apply_to(format!("  ║{tagline:^inner_width$}║")));
    eprintln!("{}", cyan.apply_to(format!("  ╚{:═<inner_width$}╝", "")));
    eprintln!();
}

/// Prints the channel statistics table with each row in its channel's color.
pub fn print_stats(report: &ChannelReport) {
    let dim = Style::new().for_stderr().dim();
    eprintln!();
    for (channel, line) in stats_lines(report) {
        let row_style = match channel {
            Some(ChannelSelector::Red) => Style::new().for_stderr().red(),
            Some(ChannelSelector::Green) => Style::new().for_stderr().green(),
            Some(ChannelSelector::Blue) => Style::new().for_stderr().blue(),
            None => dim.clone(),
        };
        eprintln!("    {}", row_style.apply_to(line));
    }
    eprintln!();
}

/// Lines of the report table, each tagged with the channel its row shows.
/// Header and rule lines carry `None`.
fn stats_lines(report: &ChannelReport) -> Vec<(Option<ChannelSelector>, String)> {
    let table = report.to_string();
    let lines: Vec<&str> = table.lines().collect();
    let header_len = lines.len().saturating_sub(ChannelSelector::ALL.len());
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let channel = i
                .checked_sub(header_len)
                .and_then(|row| ChannelSelector::ALL.get(row).copied());
            (channel, line.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chansplit_core::ChannelStats;

    #[test]
    fn stats_lines_reuse_report_table() {
        let stats = |mean, min, max| ChannelStats { mean, min, max };
        let report = ChannelReport {
            red: stats(85.0, 0, 255),
            green: stats(85.0, 0, 255),
            blue: stats(86.7, 0, 255),
        };

        let lines = stats_lines(&report);
        let rendered: Vec<&str> = lines.iter().map(|(_, l)| l.as_str()).collect();
        assert_eq!(rendered.join("\n") + "\n", report.to_string());

        let tagged: Vec<_> = lines.iter().filter_map(|(c, _)| *c).collect();
        assert_eq!(tagged, ChannelSelector::ALL.to_vec());
        let (channel, blue_row) = lines.last().unwrap();
        assert_eq!(*channel, Some(ChannelSelector::Blue));
        assert!(blue_row.starts_with("blue"));
        assert!(blue_row.contains("86.7"));
    }
}
