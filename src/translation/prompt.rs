use crate::cli::Mode;

pub const WHOLE_PROMPT_TEMPLATE: &str =
    "Translate the following English text to {language} ISO language code:\n\"\"\"{content}\"\"\"";

pub const LINE_PROMPT_TEMPLATE: &str = "Translate the following English text to the language of \"{language}\" ISO language code. \
     Replace the English word after the = with its translated equivalent in quotes. \
     Preserve the rest of the formatting intact, including the text before the = and the terminating semi-colon. \
     For example:\n\
     \n\
     \"English1\" = \"Spanish1\";\n\
     \"English2\" = \"Spanish2\";\n\
     \n\
     Translate the following:\n\
     {content}\n\
     \n";

/// Prompt templates for both modes.
///
/// `{language}` is replaced with the target language code and `{content}`
/// with the file contents or the line being translated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplates {
    pub whole: String,
    pub line: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            whole: WHOLE_PROMPT_TEMPLATE.to_string(),
            line: LINE_PROMPT_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplates {
    /// Builds the prompt for `content` in the given mode.
    ///
    /// Line content has runs of whitespace collapsed before it is embedded.
    pub fn build(&self, mode: Mode, language: &str, content: &str) -> String {
        match mode {
            Mode::Whole => render(&self.whole, language, content),
            Mode::Lines => render(&self.line, language, &collapse_whitespace(content)),
        }
    }
}

#[allow(clippy::literal_string_with_formatting_args)]
fn render(template: &str, language: &str, content: &str) -> String {
    // Placeholders are plain string replacements, not format arguments.
    // Content goes in last so braces inside it are never re-expanded.
    template
        .replace("{language}", language)
        .replace("{content}", content)
}

/// Collapses every run of whitespace into a single space and trims the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
