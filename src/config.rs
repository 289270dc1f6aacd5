use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub service_host: String,
    pub service_port: u16,
    pub seed_file: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let seed_file = env::var("SEED_FILE").ok();

        Ok(Config {
            service_host,
            service_port,
            seed_file,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Seed file: {}",
            self.seed_file.as_deref().unwrap_or("none (starting with an empty store)"));
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
