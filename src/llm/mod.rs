pub mod client;
pub mod error;

pub use client::{ChatClient, CompletionRequest, LlmResponse, OpenAiClient};
pub use error::LlmError;

#[cfg(test)]
pub mod stub;
