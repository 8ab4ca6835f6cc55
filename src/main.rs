mod config;
mod instrumentation;
mod llm;
mod server;
mod summary;

use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use config::Config;
use llm::OpenAiClient;
use summary::{Summarizer, SummaryRequest};

#[derive(Parser)]
#[command(
    name = "sensei-ai",
    about = "Context summaries and relevance explanations for search results"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service
    Serve {
        /// Address to bind (overrides HOST)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Summarize a single passage and print the result as JSON
    Summarize {
        #[arg(long)]
        book_title: String,
        #[arg(long)]
        chapter_title: Option<String>,
        #[arg(short, long)]
        query: String,
        /// File holding the passage, or `-` for stdin
        chunk: String,
    },
    /// Extract the most relevant part of a passage
    Excerpt {
        #[arg(short, long)]
        query: String,
        /// File holding the passage, or `-` for stdin
        chunk: String,
    },
}

fn read_chunk(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read passage from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).context(format!("Failed to read passage file: {}", path))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;
    instrumentation::init_tracing(config.log_format);

    if config.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; upstream calls will fail");
    }

    let llm = OpenAiClient::new(
        config.openai_api_key.as_deref(),
        &config.llm_base_url,
        Duration::from_secs(config.llm_timeout_secs),
    )?;
    let summarizer = Summarizer::new(
        Arc::new(llm),
        config.summary_model.clone(),
        config.excerpt_model.clone(),
    );

    match cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    }) {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.host.clone());
            let port = port.unwrap_or(config.port);
            server::serve(summarizer, &host, port).await?;
        }
        Commands::Summarize {
            book_title,
            chapter_title,
            query,
            chunk,
        } => {
            let request = SummaryRequest {
                chunk: read_chunk(&chunk)?,
                query,
                book_title,
                chapter_title,
            };
            let summary = summarizer.summarize(&request).await?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Excerpt { query, chunk } => {
            let chunk = read_chunk(&chunk)?;
            let excerpt = summarizer.extract_excerpt(&chunk, &query).await;
            if !excerpt.extracted {
                eprintln!("(no verbatim excerpt found; showing full passage)");
            }
            println!("{}", excerpt.text);
        }
    }

    Ok(())
}
