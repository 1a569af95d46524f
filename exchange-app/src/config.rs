//! Configuration loading from environment.

use std::env;

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    /// OTLP collector endpoint; span export is disabled when unset.
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("PORT must be a port number: {}", e))?;

        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let otlp_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|v| !v.trim().is_empty());

        Ok(Self {
            port,
            database_url,
            otlp_endpoint,
        })
    }
}
