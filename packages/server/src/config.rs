use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/job_aggregator";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Which origins the HTTP layer accepts cross-origin requests from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

impl AllowedOrigins {
    /// Parse a comma-separated origin list. Empty or `*` allows any origin.
    pub fn parse(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(|o| o.trim_end_matches('/').to_string())
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            AllowedOrigins::Any
        } else {
            AllowedOrigins::List(origins)
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    /// Serverless mode: create the pool without connecting and let the
    /// first request establish the connection.
    pub database_connect_lazy: bool,
    pub allowed_origins: AllowedOrigins,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: match env::var("PORT") {
                Ok(port) => port.parse().context("PORT must be a valid number")?,
                Err(_) => DEFAULT_PORT,
            },
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            database_max_connections: match env::var("DATABASE_MAX_CONNECTIONS") {
                Ok(n) => n
                    .parse()
                    .context("DATABASE_MAX_CONNECTIONS must be a valid number")?,
                Err(_) => DEFAULT_MAX_CONNECTIONS,
            },
            database_connect_lazy: match env::var("DATABASE_CONNECT_LAZY") {
                Ok(flag) => parse_flag(&flag).context("DATABASE_CONNECT_LAZY must be true or false")?,
                Err(_) => false,
            },
            allowed_origins: AllowedOrigins::parse(
                &env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()),
            ),
        })
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("unrecognized flag value: {other}"),
    }
}
