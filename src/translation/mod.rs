mod client;
mod error;
mod prompt;

pub use client::{
    Complete, CompletionClient, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, GenerationParams,
    TranslationRequest, TranslationResult,
};
pub use error::CompletionError;
pub use prompt::{LINE_PROMPT_TEMPLATE, PromptTemplates, WHOLE_PROMPT_TEMPLATE, collapse_whitespace};
