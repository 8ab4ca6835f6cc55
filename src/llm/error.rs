use thiserror::Error;

/// Failure talking to the upstream text-generation API.
///
/// The `Display` text is what HTTP callers see as the error detail.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("OPENAI_API_KEY is not configured")]
    MissingApiKey,

    #[error("LLM API request timed out: {0}")]
    Timeout(String),

    #[error("Failed to send request to LLM API: {0}")]
    Transport(String),

    #[error("LLM API error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse LLM API response: {0}")]
    Decode(String),

    #[error("LLM API returned no completion text")]
    EmptyCompletion,
}

impl From<reqwest::Error> for LlmError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            LlmError::Timeout(error.to_string())
        } else if error.is_decode() {
            LlmError::Decode(error.to_string())
        } else {
            LlmError::Transport(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_upstream_message() {
        let err = LlmError::Timeout("operation timed out".into());
        assert_eq!(
            err.to_string(),
            "LLM API request timed out: operation timed out"
        );

        let err = LlmError::Status {
            status: 429,
            body: "quota exceeded".into(),
        };
        assert_eq!(err.to_string(), "LLM API error (429): quota exceeded");
    }
}
