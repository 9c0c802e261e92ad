//! Environment configuration.

use std::path::PathBuf;

use chrono::Duration;
use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SOURCE: &str = "public";
pub const DEFAULT_MANIFEST: &str = "data/manifest.json";
pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 120;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid SESSION_TTL_MINUTES: {0}")]
    InvalidSessionTtl(String),

    #[error("invalid VOCAB_SOURCE url {value}: {reason}")]
    InvalidSourceUrl { value: String, reason: String },
}

/// Where the manifest and set files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    /// A directory acting as the site root.
    Directory(PathBuf),
    /// A base URL acting as the site root.
    Http(Url),
}

impl SourceLocation {
    /// `http://` and `https://` values are URLs, anything else is a directory.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        if value.starts_with("http://") || value.starts_with("https://") {
            let url = Url::parse(value).map_err(|e| ConfigError::InvalidSourceUrl {
                value: value.to_string(),
                reason: e.to_string(),
            })?;
            Ok(Self::Http(url))
        } else {
            Ok(Self::Directory(PathBuf::from(value)))
        }
    }
}

/// Server configuration.
///
/// Env vars:
/// - HOST: bind address (default 0.0.0.0)
/// - PORT: bind port (default 3000)
/// - VOCAB_SOURCE: data directory or base URL (default `public`)
/// - VOCAB_MANIFEST: manifest path relative to the source (default `data/manifest.json`)
/// - SESSION_TTL_MINUTES: idle minutes before a session expires (default 120)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub source: SourceLocation,
    pub manifest_path: String,
    pub session_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidPort(value.clone()))?,
            Err(_) => DEFAULT_PORT,
        };

        let source = SourceLocation::parse(
            &std::env::var("VOCAB_SOURCE").unwrap_or_else(|_| DEFAULT_SOURCE.to_string()),
        )?;

        let manifest_path =
            std::env::var("VOCAB_MANIFEST").unwrap_or_else(|_| DEFAULT_MANIFEST.to_string());

        let session_ttl = match std::env::var("SESSION_TTL_MINUTES") {
            Ok(value) => parse_ttl_minutes(&value)?,
            Err(_) => Duration::minutes(DEFAULT_SESSION_TTL_MINUTES),
        };

        Ok(Self {
            host,
            port,
            source,
            manifest_path,
            session_ttl,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// A positive number of minutes.
fn parse_ttl_minutes(value: &str) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|minutes| *minutes > 0)
        .and_then(Duration::try_minutes)
        .ok_or_else(|| ConfigError::InvalidSessionTtl(value.to_string()))
}
