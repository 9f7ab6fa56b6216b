use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::CompletionError;
use crate::cli::Mode;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/engines/text-davinci-003/completions";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// Generation stops at a closing triple quote.
const STOP_SEQUENCE: &str = "\"\"\"";

/// A single completion call: the rendered prompt plus credentials.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub prompt_text: String,
    pub api_key: String,
}

/// Outcome of one completion call.
pub type TranslationResult = Result<String, CompletionError>;

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub frequency_penalty: Option<f64>,
    pub presence_penalty: Option<f64>,
}

impl GenerationParams {
    /// Parameters for a translation mode.
    ///
    /// Whole-file requests carry explicit sampling settings and a larger
    /// token budget; line requests rely on the endpoint's defaults.
    pub const fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Whole => Self {
                max_tokens: 2000,
                temperature: Some(0.7),
                top_p: Some(1.0),
                frequency_penalty: Some(0.0),
                presence_penalty: Some(0.0),
            },
            Mode::Lines => Self {
                max_tokens: 1000,
                temperature: None,
                top_p: None,
                frequency_penalty: None,
                presence_penalty: None,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct CompletionBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    prompt: &'a str,
    max_tokens: u32,
    n: u32,
    stop: [&'static str; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    frequency_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    presence_penalty: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CompletionResponse {
    Error { error: ApiErrorBody },
    Choices { choices: Vec<Choice> },
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct Choice {
    text: String,
}

/// Anything that can turn a prompt into completion text.
#[async_trait]
pub trait Complete: Send + Sync {
    async fn complete(&self, request: &TranslationRequest) -> TranslationResult;
}

/// HTTP client for an OpenAI-style `/completions` endpoint.
pub struct CompletionClient {
    client: Client,
    endpoint: String,
    model: Option<String>,
    params: GenerationParams,
}

impl CompletionClient {
    pub fn new(
        endpoint: String,
        model: Option<String>,
        params: GenerationParams,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint,
            model,
            params,
        })
    }

    fn body<'a>(&'a self, prompt: &'a str) -> CompletionBody<'a> {
        CompletionBody {
            model: self.model.as_deref(),
            prompt,
            max_tokens: self.params.max_tokens,
            n: 1,
            stop: [STOP_SEQUENCE],
            temperature: self.params.temperature,
            top_p: self.params.top_p,
            frequency_penalty: self.params.frequency_penalty,
            presence_penalty: self.params.presence_penalty,
        }
    }
}

#[async_trait]
impl Complete for CompletionClient {
    async fn complete(&self, request: &TranslationRequest) -> TranslationResult {
        tracing::debug!(
            endpoint = %self.endpoint,
            prompt_len = request.prompt_text.len(),
            "sending completion request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", request.api_key))
            .json(&self.body(&request.prompt_text))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(%status, body_len = body.len(), "completion response received");

        decode_response(status, &body)
    }
}

/// Decodes a completion response body into the trimmed text of the first choice.
fn decode_response(status: StatusCode, body: &str) -> TranslationResult {
    if body.trim().is_empty() {
        return Err(CompletionError::EmptyResponse);
    }

    let http_error = || CompletionError::Api(format!("HTTP {status}: {}", body.trim()));

    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) if !status.is_success() => return Err(http_error()),
        Err(e) => return Err(CompletionError::MalformedJson(e.to_string())),
    };

    if !value.is_object() {
        return Err(CompletionError::MalformedJson(
            "expected a JSON object".to_string(),
        ));
    }

    match serde_json::from_value::<CompletionResponse>(value) {
        Ok(CompletionResponse::Error { error }) => Err(CompletionError::Api(error.message)),
        Ok(CompletionResponse::Choices { choices }) => choices
            .into_iter()
            .next()
            .map(|choice| choice.text.trim().to_string())
            .ok_or(CompletionError::UnexpectedShape),
        Err(_) if !status.is_success() => Err(http_error()),
        Err(_) => Err(CompletionError::UnexpectedShape),
    }
}
