use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Mail settings are optional here: the contact endpoint reports a
/// configuration error at send time when they are missing, instead of the
/// whole service refusing to start.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub from_email: Option<String>,
    pub to_email: Option<String>,
    pub mail_api_url: Option<String>,
    pub mail_api_key: Option<String>,
    pub cv_data_path: PathBuf,
    pub content_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: optional_env("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            from_email: optional_env("FROM_EMAIL"),
            to_email: optional_env("TO_EMAIL"),
            mail_api_url: optional_env("MAIL_API_URL"),
            mail_api_key: optional_env("MAIL_API_KEY"),
            cv_data_path: optional_env("CV_DATA_PATH")
                .unwrap_or_else(|| "data/cv-data.json".to_string())
                .into(),
            content_dir: optional_env("CONTENT_DIR")
                .unwrap_or_else(|| "content".to_string())
                .into(),
        })
    }
}

/// Reads an environment variable, treating empty values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
