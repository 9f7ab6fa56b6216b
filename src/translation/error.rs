use thiserror::Error;

/// Why a single completion call failed.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Transport-level failure: DNS, connect, timeout or body read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("no response data")]
    EmptyResponse,

    #[error("invalid JSON response: {0}")]
    MalformedJson(String),

    /// The endpoint answered with an error object; the message is verbatim.
    #[error("{0}")]
    Api(String),

    #[error("invalid response structure: missing choices[0].text")]
    UnexpectedShape,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_is_verbatim() {
        let err = CompletionError::Api("Incorrect API key provided".to_string());
        assert_eq!(err.to_string(), "Incorrect API key provided");
    }

    #[test]
    fn test_unexpected_shape_mentions_field() {
        assert!(
            CompletionError::UnexpectedShape
                .to_string()
                .contains("choices[0].text")
        );
    }
}
