use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::{Args, Mode};
use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::fs::atomic_write;
use crate::input::InputReader;
use crate::orchestrator::{TranslationJob, translate_lines, translate_whole};
use crate::output;
use crate::translation::{CompletionClient, GenerationParams};
use crate::ui::{LineProgress, Spinner};

pub struct TranslateOptions {
    pub api_key: String,
    pub language_code: String,
    pub input_file: String,
    pub output_file: String,
    pub mode: Option<Mode>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl From<Args> for TranslateOptions {
    fn from(args: Args) -> Self {
        Self {
            api_key: args.api_key,
            language_code: args.language_code,
            input_file: args.input_file,
            output_file: args.output_file,
            mode: args.mode,
            endpoint: args.endpoint,
            model: args.model,
            timeout_secs: args.timeout,
        }
    }
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let config = load_merged_config(&options)?;

    let client = CompletionClient::new(
        config.endpoint.clone(),
        config.model.clone(),
        GenerationParams::for_mode(config.mode),
        config.timeout,
    )?;

    let job = TranslationJob {
        api_key: &options.api_key,
        language: &options.language_code,
        templates: &config.templates,
    };

    tracing::debug!(mode = ?config.mode, endpoint = %config.endpoint, "starting translation");

    let translated = match config.mode {
        Mode::Whole => {
            let content = InputReader::read_all(&options.input_file)?;

            let spinner = Spinner::new("Translating...", output::is_quiet());
            let result = translate_whole(&client, job, &content).await;
            spinner.stop();

            result.context("Unable to translate input file")?
        }
        Mode::Lines => {
            let batch = InputReader::read_lines(&options.input_file)?;

            let progress = LineProgress::new(batch.len(), output::is_quiet());
            let report = translate_lines(&client, job, &batch, |line, result| {
                progress.inc();
                if let Err(e) = result {
                    progress.suspend(|| output::report_line_failure(line, e));
                }
            })
            .await;
            drop(progress);

            output::report_dropped_lines(report.failures.len(), batch.len());

            report.output()
        }
    };

    atomic_write(Path::new(&options.output_file), &translated)?;

    output::report_saved(&options.output_file);

    Ok(())
}

fn load_merged_config(options: &TranslateOptions) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;

    resolve_config(
        &ResolveOptions {
            endpoint: options.endpoint.clone(),
            model: options.model.clone(),
            mode: options.mode,
            timeout_secs: options.timeout_secs,
        },
        &file_config,
    )
}
