//! # tlx - File Translation CLI
//!
//! `tlx` translates a text file through an LLM completion endpoint.
//! It either sends the whole file in one request or fans out one request
//! per line, which suits key/value localization tables such as
//! `"Hello" = "Hello";`.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate a whole document to Japanese
//! tlx "$OPENAI_API_KEY" ja notes.txt notes.ja.txt
//!
//! # Translate a strings table one line at a time
//! tlx --mode lines "$OPENAI_API_KEY" es Localizable.strings es.strings
//! ```
//!
//! ## Configuration
//!
//! Optional settings live in `~/.config/tlx/config.toml`:
//!
//! ```toml
//! [tlx]
//! endpoint = "https://api.openai.com/v1/completions"
//! model = "gpt-3.5-turbo-instruct"
//! mode = "lines"
//! timeout_secs = 600
//!
//! [prompts]
//! line = "Translate to {language}: {content}"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// File system utilities.
pub mod fs;

/// Input reading for whole-file and line modes.
pub mod input;

/// Fan-out/fan-in of completion requests for both modes.
pub mod orchestrator;

/// Status lines and failure reports on stderr.
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Completion client and prompt templates.
pub mod translation;

/// Terminal UI components (spinner, progress bar, colors).
pub mod ui;
