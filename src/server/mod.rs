//! HTTP front end for the summarizer.

mod handlers;
mod routes;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;

use crate::summary::Summarizer;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub summarizer: Arc<Summarizer>,
}

impl AppState {
    pub fn new(summarizer: Summarizer) -> Self {
        Self {
            summarizer: Arc::new(summarizer),
        }
    }
}

/// Start the web server.
pub async fn serve(summarizer: Summarizer, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(AppState::new(summarizer));

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .context(format!("Invalid listen address {}:{}", host, port))?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context(format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
