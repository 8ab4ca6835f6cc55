//! Request handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::llm::LlmError;
use crate::summary::{BatchItem, SummaryRequest, SummaryResponse};

/// Upstream failures surface as a 500 with the error text as `detail`.
pub struct ApiError(LlmError);

impl From<LlmError> for ApiError {
    fn from(error: LlmError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "detail": self.0.to_string() })),
        )
            .into_response()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequest {
    pub query: String,
    pub items: Vec<BatchItem>,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub summaries: Vec<SummaryResponse>,
}

#[derive(Debug, Deserialize)]
pub struct ExcerptRequest {
    pub chunk: String,
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct ExcerptResponse {
    pub excerpt: String,
    pub extracted: bool,
}

pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "Sensei AI Service is running" }))
}

/// Health probe; never touches the upstream API.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

pub async fn generate_summary(
    State(state): State<AppState>,
    Json(request): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let summary = state.summarizer.summarize(&request).await?;
    Ok(Json(summary))
}

pub async fn generate_summaries(
    State(state): State<AppState>,
    Json(request): Json<BatchRequest>,
) -> Json<BatchResponse> {
    let summaries = state
        .summarizer
        .summarize_batch(&request.query, &request.items)
        .await;
    Json(BatchResponse { summaries })
}

pub async fn extract_excerpt(
    State(state): State<AppState>,
    Json(request): Json<ExcerptRequest>,
) -> Json<ExcerptResponse> {
    let excerpt = state
        .summarizer
        .extract_excerpt(&request.chunk, &request.query)
        .await;
    Json(ExcerptResponse {
        excerpt: excerpt.text,
        extracted: excerpt.extracted,
    })
}
