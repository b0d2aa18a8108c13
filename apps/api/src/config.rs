use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

const DEFAULT_RESUME_BASE_URL: &str = "https://raw.githubusercontent.com/c0ze/resume/main/content/";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
    pub resume_base_url: String,
    pub resume_language: String,
    pub resume_owner: String,
    pub resume_visa_status: Option<String>,
    /// Snapshot directory for offline startup. Disabled when unset.
    pub resume_cache_dir: Option<PathBuf>,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_model: optional_env("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_base_url: optional_env("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            allowed_origins: optional_env("ALLOWED_ORIGINS")
                .map(|raw| parse_allowed_origins(&raw))
                .unwrap_or_default(),
            resume_base_url: optional_env("RESUME_BASE_URL")
                .unwrap_or_else(|| DEFAULT_RESUME_BASE_URL.to_string()),
            resume_language: optional_env("RESUME_LANGUAGE").unwrap_or_else(|| "en".to_string()),
            resume_owner: optional_env("RESUME_OWNER").unwrap_or_else(|| "Arda".to_string()),
            resume_visa_status: optional_env("RESUME_VISA_STATUS"),
            resume_cache_dir: optional_env("RESUME_CACHE_DIR").map(PathBuf::from),
            static_dir: optional_env("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./public")),
        })
    }

    /// Directory URL holding the five documents for the configured language.
    pub fn resume_content_url(&self) -> String {
        format!(
            "{}/{}/",
            self.resume_base_url.trim_end_matches('/'),
            self.resume_language.trim_matches('/')
        )
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Unset and blank are treated the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Splits a comma-separated origin list, dropping blank entries.
pub fn parse_allowed_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Config {
            gemini_api_key: "test-key".to_string(),
            gemini_model: DEFAULT_MODEL.to_string(),
            gemini_base_url: DEFAULT_BASE_URL.to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            allowed_origins: Vec::new(),
            resume_base_url: DEFAULT_RESUME_BASE_URL.to_string(),
            resume_language: "en".to_string(),
            resume_owner: "Arda".to_string(),
            resume_visa_status: None,
            resume_cache_dir: None,
            static_dir: PathBuf::from("./public"),
        }
    }
}
