use anyhow::{bail, Context, Result};

/// Placeholder some deployments ship instead of a real key.
const UNSET_KEY_PLACEHOLDER: &str = "not-set-please-configure";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => bail!("unknown log format: {}", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub llm_base_url: String,
    pub summary_model: String,
    pub excerpt_model: String,
    pub llm_timeout_secs: u64,
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            openai_api_key: normalize_api_key(std::env::var("OPENAI_API_KEY").ok()),
            llm_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1/chat/completions".into()),
            summary_model: std::env::var("SUMMARY_MODEL")
                .unwrap_or_else(|_| "gpt-4-1106-preview".into()),
            excerpt_model: std::env::var("EXCERPT_MODEL")
                .unwrap_or_else(|_| "gpt-3.5-turbo".into()),
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "60".into())
                .parse()
                .context("LLM_TIMEOUT_SECS must be a number")?,
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8001".into())
                .parse()
                .context("PORT must be a valid port number")?,
            log_format: std::env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "text".into())
                .parse()
                .context("LOG_FORMAT must be `text` or `json`")?,
        })
    }
}

fn normalize_api_key(key: Option<String>) -> Option<String> {
    key.map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty() && k != UNSET_KEY_PLACEHOLDER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_and_blank_keys_count_as_missing() {
        assert_eq!(normalize_api_key(None), None);
        assert_eq!(normalize_api_key(Some("  ".into())), None);
        assert_eq!(normalize_api_key(Some(UNSET_KEY_PLACEHOLDER.into())), None);
        assert_eq!(
            normalize_api_key(Some("sk-test ".into())),
            Some("sk-test".to_string())
        );
    }

    #[test]
    fn log_format_parsing() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("TEXT".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert!("yaml".parse::<LogFormat>().is_err());
    }
}
