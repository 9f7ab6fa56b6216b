//! Run diagnostics on stderr.
//!
//! The translation itself only ever goes to the output file. Everything
//! printed here is either a status line, which `--quiet` hides, or a
//! failure report, which is always printed.

use std::fmt::Display;
use std::sync::OnceLock;

use crate::ui::Style;

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub quiet: bool,
    pub no_color: bool,
}

impl OutputConfig {
    /// Builds the config from CLI flags; `NO_COLOR` (https://no-color.org/)
    /// disables colors as well.
    pub fn from_flags(quiet: bool, no_color: bool) -> Self {
        Self {
            quiet,
            no_color: no_color || std::env::var_os("NO_COLOR").is_some(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_flags(false, false)
    }
}

/// Sets the config once at startup; later calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

pub fn is_quiet() -> bool {
    config().quiet
}

pub fn is_no_color() -> bool {
    config().no_color
}

pub fn line_failure_message(line: &str, error: &dyn Display) -> String {
    format!(
        "{} {}. Error: {error}",
        Style::error("Error translating line:"),
        Style::secondary(line)
    )
}

pub fn dropped_lines_message(failed: usize, total: usize) -> String {
    format!(
        "{} {failed} of {total} lines failed and were left out of the output",
        Style::warning("Warning:")
    )
}

pub fn saved_message(output_file: &str) -> String {
    format!(
        "{} Output saved to {}.",
        Style::success("Translation complete."),
        Style::value(output_file)
    )
}

/// Reports one line that was dropped from the output.
pub fn report_line_failure(line: &str, error: &dyn Display) {
    eprintln!("{}", line_failure_message(line, error));
}

/// Summarizes a line-mode run where some lines failed.
pub fn report_dropped_lines(failed: usize, total: usize) {
    if failed > 0 {
        eprintln!("{}", dropped_lines_message(failed, total));
    }
}

pub fn report_saved(output_file: &str) {
    if !is_quiet() {
        eprintln!("{}", saved_message(output_file));
    }
}

/// Prints the error that ends the run, with its whole context chain.
pub fn report_fatal(error: &anyhow::Error) {
    eprintln!("{} {error:#}", Style::error("Error:"));
}

#[cfg(test)]
mod tests {
    use super::*;

    // Colors depend on the global config, so assertions only look for
    // substrings that stay contiguous with or without escape codes.

    #[test]
    fn test_from_flags_keeps_quiet() {
        assert!(OutputConfig::from_flags(true, false).quiet);
        assert!(!OutputConfig::from_flags(false, false).quiet);
        assert!(OutputConfig::from_flags(false, true).no_color);
    }

    #[test]
    fn test_line_failure_message_names_line_and_error() {
        let message = line_failure_message("\"Save\" = \"Save\";", &"rate limited");
        assert!(message.contains("Error translating line:"));
        assert!(message.contains("\"Save\" = \"Save\";"));
        assert!(message.ends_with("Error: rate limited"));
    }

    #[test]
    fn test_dropped_lines_message_counts() {
        assert!(dropped_lines_message(2, 7).contains("2 of 7 lines failed"));
    }

    #[test]
    fn test_saved_message_names_path() {
        let message = saved_message("out/es.strings");
        assert!(message.contains("Translation complete."));
        assert!(message.contains("out/es.strings"));
    }
}
