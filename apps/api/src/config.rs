use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a workable default. The completion credential is
/// optional: a missing key fails the first completion call, not startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub lessons_base_url: String,
    pub openai_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            lessons_base_url: std::env::var("LESSONS_SERVICE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string()),
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
