use serde::Serialize;

use crate::config::LogFormat;
use crate::llm::LlmResponse;

pub fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Summary,
    Excerpt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Parsed,
    Fallback,
    Failed,
}

/// One upstream call, as reported to the log.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRun {
    pub id: String,
    pub timestamp: String,
    pub operation: Operation,
    pub model: String,
    pub latency_ms: u64,
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub outcome: Outcome,
}

impl SummaryRun {
    pub fn new(operation: Operation, model: &str, latency_ms: u64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            operation,
            model: model.to_string(),
            latency_ms,
            input_tokens: 0,
            output_tokens: 0,
            outcome: Outcome::Failed,
        }
    }

    pub fn with_response(mut self, response: &LlmResponse, outcome: Outcome) -> Self {
        self.input_tokens = response.input_tokens;
        self.output_tokens = response.output_tokens;
        self.outcome = outcome;
        self
    }

    pub fn total_tokens(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }

    pub fn summary(&self) -> String {
        format!(
            "{:?} via {} | {:?} | latency: {:.2}s | tokens: {}",
            self.operation,
            self.model,
            self.outcome,
            self.latency_ms as f64 / 1000.0,
            self.total_tokens(),
        )
    }

    pub fn emit(&self) {
        match self.outcome {
            Outcome::Failed => tracing::warn!(
                run_id = %self.id,
                timestamp = %self.timestamp,
                "{}",
                self.summary()
            ),
            _ => tracing::info!(
                run_id = %self.id,
                timestamp = %self.timestamp,
                input_tokens = self.input_tokens,
                output_tokens = self.output_tokens,
                "{}",
                self.summary()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_records_usage_and_outcome() {
        let response = LlmResponse {
            text: String::new(),
            input_tokens: 200,
            output_tokens: 80,
        };
        let run = SummaryRun::new(Operation::Summary, "gpt-4-1106-preview", 1500)
            .with_response(&response, Outcome::Fallback);

        assert_eq!(run.total_tokens(), 280);
        assert_eq!(run.outcome, Outcome::Fallback);
        assert_eq!(
            run.summary(),
            "Summary via gpt-4-1106-preview | Fallback | latency: 1.50s | tokens: 280"
        );

        let json = serde_json::to_value(&run).unwrap();
        assert_eq!(json["operation"], "summary");
        assert_eq!(json["outcome"], "fallback");
        assert!(uuid::Uuid::parse_str(json["id"].as_str().unwrap()).is_ok());
    }

    #[test]
    fn new_run_defaults_to_failed() {
        let run = SummaryRun::new(Operation::Excerpt, "gpt-3.5-turbo", 10);
        assert_eq!(run.outcome, Outcome::Failed);
        assert_eq!(run.total_tokens(), 0);
    }
}
