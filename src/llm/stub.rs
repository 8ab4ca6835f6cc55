//! Canned [`ChatClient`] for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{ChatClient, CompletionRequest, LlmError, LlmResponse};

type Reply = Box<dyn Fn(&CompletionRequest) -> Result<String, LlmError> + Send + Sync>;

pub struct StubClient {
    reply: Reply,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl StubClient {
    pub fn replying(text: &str) -> Self {
        let text = text.to_string();
        Self::with(move |_| Ok(text.clone()))
    }

    pub fn failing(make_err: fn() -> LlmError) -> Self {
        Self::with(move |_| Err(make_err()))
    }

    pub fn with<F>(reply: F) -> Self
    where
        F: Fn(&CompletionRequest) -> Result<String, LlmError> + Send + Sync + 'static,
    {
        Self {
            reply: Box::new(reply),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatClient for StubClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<LlmResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        let text = (self.reply)(request)?;
        Ok(LlmResponse {
            text,
            input_tokens: 10,
            output_tokens: 5,
        })
    }
}
