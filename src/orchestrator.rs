//! Drives a translation run in either mode.
//!
//! Whole-file mode makes exactly one completion call. Line mode dispatches
//! one call per line at once and waits for every one of them, keeping the
//! successes and reporting the failures without aborting the batch.

use futures_util::future::join_all;

use crate::cli::Mode;
use crate::input::LineBatch;
use crate::translation::{
    Complete, CompletionError, PromptTemplates, TranslationRequest, TranslationResult,
};

/// Everything a run needs besides the content itself.
#[derive(Debug, Clone, Copy)]
pub struct TranslationJob<'a> {
    pub api_key: &'a str,
    pub language: &'a str,
    pub templates: &'a PromptTemplates,
}

impl TranslationJob<'_> {
    fn request(&self, mode: Mode, content: &str) -> TranslationRequest {
        TranslationRequest {
            prompt_text: self.templates.build(mode, self.language, content),
            api_key: self.api_key.to_string(),
        }
    }
}

/// A line whose translation failed.
#[derive(Debug)]
pub struct LineFailure {
    pub line: String,
    pub error: CompletionError,
}

/// Result of a line-mode run.
#[derive(Debug, Default)]
pub struct LinesReport {
    /// Successful translations in input order.
    pub translated: Vec<String>,
    pub failures: Vec<LineFailure>,
}

impl LinesReport {
    /// Joins the translated lines with newlines.
    pub fn output(&self) -> String {
        self.translated.join("\n")
    }
}

/// Translates the whole content with a single completion call.
pub async fn translate_whole<C>(
    completer: &C,
    job: TranslationJob<'_>,
    content: &str,
) -> TranslationResult
where
    C: Complete + ?Sized,
{
    let request = job.request(Mode::Whole, content);
    completer.complete(&request).await
}

/// Translates every line concurrently and waits for all of them.
///
/// `on_result` fires once per line as soon as its call finishes, in
/// completion order.
pub async fn translate_lines<C, F>(
    completer: &C,
    job: TranslationJob<'_>,
    batch: &LineBatch,
    on_result: F,
) -> LinesReport
where
    C: Complete + ?Sized,
    F: Fn(&str, &TranslationResult),
{
    let on_result = &on_result;

    let calls = batch.iter().map(|line| async move {
        let request = job.request(Mode::Lines, line);
        let result = completer.complete(&request).await;
        tracing::debug!(line, ok = result.is_ok(), "line finished");
        on_result(line, &result);
        (line, result)
    });

    let mut report = LinesReport::default();
    for (line, result) in join_all(calls).await {
        match result {
            Ok(text) => report.translated.push(text),
            Err(error) => report.failures.push(LineFailure {
                line: line.to_string(),
                error,
            }),
        }
    }

    report
}
