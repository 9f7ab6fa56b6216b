use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "tlx")]
#[command(about = "Translate a text file through an LLM completion endpoint")]
#[command(version)]
pub struct Args {
    /// API key sent as a Bearer token
    pub api_key: String,

    /// Target language code (ISO 639-1, e.g., ja, es, zh)
    pub language_code: String,

    /// File to translate
    pub input_file: String,

    /// File to write the translation to (overwritten)
    pub output_file: String,

    /// Translate the whole file in one request, or one request per line
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Completion endpoint URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Model name sent with each request
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Suppress status output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Translation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// One request for the entire file.
    #[default]
    Whole,
    /// One request per non-empty line, sent concurrently.
    Lines,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_four_positionals() {
        let args = Args::try_parse_from(["tlx", "sk-test", "ja", "in.txt", "out.txt"]).unwrap();
        assert_eq!(args.api_key, "sk-test");
        assert_eq!(args.language_code, "ja");
        assert_eq!(args.input_file, "in.txt");
        assert_eq!(args.output_file, "out.txt");
        assert_eq!(args.mode, None);
        assert!(!args.quiet);
    }

    #[test]
    fn test_parse_options() {
        let args = Args::try_parse_from([
            "tlx",
            "--mode",
            "lines",
            "-e",
            "http://localhost:8080/v1/completions",
            "--timeout",
            "30",
            "-q",
            "sk-test",
            "es",
            "in.strings",
            "out.strings",
        ])
        .unwrap();
        assert_eq!(args.mode, Some(Mode::Lines));
        assert_eq!(
            args.endpoint.as_deref(),
            Some("http://localhost:8080/v1/completions")
        );
        assert_eq!(args.timeout, Some(30));
        assert!(args.quiet);
    }

    #[test]
    fn test_too_few_positionals_rejected() {
        assert!(Args::try_parse_from(["tlx", "sk-test", "ja", "in.txt"]).is_err());
    }

    #[test]
    fn test_too_many_positionals_rejected() {
        assert!(
            Args::try_parse_from(["tlx", "sk-test", "ja", "in.txt", "out.txt", "extra"]).is_err()
        );
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(
            Args::try_parse_from(["tlx", "--mode", "words", "k", "ja", "in.txt", "out.txt"])
                .is_err()
        );
    }
}
