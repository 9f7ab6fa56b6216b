use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Mode;
use crate::paths;
use crate::translation::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, PromptTemplates};

/// Default settings in the `[tlx]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TlxConfig {
    /// Completion endpoint URL.
    pub endpoint: Option<String>,
    /// Model name sent with each request.
    pub model: Option<String>,
    /// Default translation mode.
    pub mode: Option<Mode>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// Prompt template overrides in the `[prompts]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptConfig {
    pub whole: Option<String>,
    pub line: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/tlx/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub tlx: TlxConfig,
    #[serde(default)]
    pub prompts: PromptConfig,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub model: Option<String>,
    pub mode: Mode,
    pub timeout: Duration,
    pub templates: PromptTemplates,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub mode: Option<Mode>,
    pub timeout_secs: Option<u64>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI option, then config file, then built-in default.
///
/// # Errors
///
/// Returns an error for a zero timeout or a prompt template without a
/// `{content}` placeholder.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let endpoint = options
        .endpoint
        .as_ref()
        .or(config_file.tlx.endpoint.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let model = options
        .model
        .as_ref()
        .or(config_file.tlx.model.as_ref())
        .cloned();

    let mode = options.mode.or(config_file.tlx.mode).unwrap_or_default();

    let timeout = match options.timeout_secs.or(config_file.tlx.timeout_secs) {
        Some(0) => bail!("Invalid timeout: must be at least 1 second"),
        Some(secs) => Duration::from_secs(secs),
        None => DEFAULT_TIMEOUT,
    };

    let defaults = PromptTemplates::default();
    let templates = PromptTemplates {
        whole: template_or_default(
            config_file.prompts.whole.as_deref(),
            defaults.whole,
            "whole",
        )?,
        line: template_or_default(config_file.prompts.line.as_deref(), defaults.line, "line")?,
    };

    Ok(ResolvedConfig {
        endpoint,
        model,
        mode,
        timeout,
        templates,
    })
}

#[allow(clippy::literal_string_with_formatting_args)]
fn template_or_default(custom: Option<&str>, default: String, key: &str) -> Result<String> {
    match custom {
        Some(template) if !template.contains("{content}") => bail!(
            "Invalid prompt template 'prompts.{key}': missing the {{content}} placeholder\n\n\
             Templates may use {{language}} and must use {{content}}."
        ),
        Some(template) => Ok(template.to_string()),
        None => Ok(default),
    }
}

/// Loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is read from `$XDG_CONFIG_HOME/tlx/config.toml`
    /// or `~/.config/tlx/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    #[cfg(test)]
    const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })
    }

    /// Loads the config file, falling back to defaults when it does not exist.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}
