pub mod excerpt;
pub mod parser;
pub mod prompt;

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::instrumentation::{Operation, Outcome, SummaryRun};
use crate::llm::{ChatClient, CompletionRequest, LlmError};

pub use excerpt::Excerpt;
pub use parser::{parse_summary, ParsedSummary};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub chunk: String,
    pub query: String,
    pub book_title: String,
    #[serde(default)]
    pub chapter_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub context_summary: String,
    pub relevance_explanation: String,
}

impl SummaryResponse {
    /// Placeholder for a batch item whose upstream call failed.
    pub fn empty() -> Self {
        Self {
            context_summary: String::new(),
            relevance_explanation: String::new(),
        }
    }
}

impl From<ParsedSummary> for SummaryResponse {
    fn from(parsed: ParsedSummary) -> Self {
        let (context_summary, relevance_explanation) = parsed.into_pair();
        Self {
            context_summary,
            relevance_explanation,
        }
    }
}

/// A passage in a batch; the query is shared by the whole batch.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItem {
    pub chunk: String,
    pub book_title: String,
    #[serde(default)]
    pub chapter_title: Option<String>,
}

pub struct Summarizer {
    llm: Arc<dyn ChatClient>,
    summary_model: String,
    excerpt_model: String,
}

impl Summarizer {
    pub fn new(llm: Arc<dyn ChatClient>, summary_model: String, excerpt_model: String) -> Self {
        Self {
            llm,
            summary_model,
            excerpt_model,
        }
    }

    pub async fn summarize(&self, request: &SummaryRequest) -> Result<SummaryResponse, LlmError> {
        tracing::debug!(
            book = %request.book_title,
            chapter = ?request.chapter_title,
            "Generating summary"
        );

        let completion = CompletionRequest {
            model: self.summary_model.clone(),
            system: prompt::SYSTEM_PROMPT.to_string(),
            user: prompt::user_prompt(request),
            max_tokens: prompt::MAX_TOKENS,
            temperature: prompt::TEMPERATURE,
        };

        let start = Instant::now();
        let result = self.llm.complete(&completion).await;
        let run = SummaryRun::new(
            Operation::Summary,
            &self.summary_model,
            start.elapsed().as_millis() as u64,
        );

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                run.emit();
                tracing::error!(error = %e, "Summary generation failed");
                return Err(e);
            }
        };

        let parsed = parse_summary(&response.text);
        let outcome = if parsed.is_parsed() {
            Outcome::Parsed
        } else {
            Outcome::Fallback
        };
        run.with_response(&response, outcome).emit();

        Ok(parsed.into())
    }

    /// Summarise several passages for one query, one call at a time.
    ///
    /// A failed item yields an empty pair so the batch as a whole succeeds.
    pub async fn summarize_batch(&self, query: &str, items: &[BatchItem]) -> Vec<SummaryResponse> {
        let mut summaries = Vec::with_capacity(items.len());

        for (i, item) in items.iter().enumerate() {
            let request = SummaryRequest {
                chunk: item.chunk.clone(),
                query: query.to_string(),
                book_title: item.book_title.clone(),
                chapter_title: item.chapter_title.clone(),
            };

            match self.summarize(&request).await {
                Ok(summary) => summaries.push(summary),
                Err(e) => {
                    tracing::warn!(item = i, error = %e, "Batch item failed, using empty summary");
                    summaries.push(SummaryResponse::empty());
                }
            }
        }

        summaries
    }

    /// Pick the contiguous part of `chunk` most relevant to `query`.
    ///
    /// Never fails: upstream errors and non-verbatim replies yield the full passage.
    pub async fn extract_excerpt(&self, chunk: &str, query: &str) -> Excerpt {
        let completion = CompletionRequest {
            model: self.excerpt_model.clone(),
            system: excerpt::SYSTEM_PROMPT.to_string(),
            user: excerpt::user_prompt(chunk, query),
            max_tokens: excerpt::MAX_TOKENS,
            temperature: excerpt::TEMPERATURE,
        };

        let start = Instant::now();
        let result = self.llm.complete(&completion).await;
        let run = SummaryRun::new(
            Operation::Excerpt,
            &self.excerpt_model,
            start.elapsed().as_millis() as u64,
        );

        match result {
            Ok(response) => {
                let excerpt = excerpt::validate_excerpt(chunk, &response.text);
                if !excerpt.extracted {
                    tracing::warn!("Excerpt not found verbatim in passage, using full text");
                }
                let outcome = if excerpt.extracted {
                    Outcome::Parsed
                } else {
                    Outcome::Fallback
                };
                run.with_response(&response, outcome).emit();
                excerpt
            }
            Err(e) => {
                run.emit();
                tracing::error!(error = %e, "Excerpt extraction failed, using full text");
                Excerpt::full(chunk)
            }
        }
    }
}
