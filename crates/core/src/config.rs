use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_u16(key: &str, default: u16) -> u16 {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub ingestion: IngestionConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            ingestion: IngestionConfig::from_env(),
        }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  server:     host={}, port={}", self.server.host, self.server.port);
        tracing::info!("  ingestion:  batch_size={}", self.ingestion.batch_size);
        tracing::info!(
            "  scheduler:  tick_interval={}ms, processing_duration={}ms",
            self.ingestion.tick_interval_ms,
            self.ingestion.processing_duration_ms
        );
    }
}

// ── Server ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_u16("PORT", 3000),
            cors_origin: env_or("CORS_ORIGIN", "*"),
        }
    }
}

// ── Ingestion / scheduling ────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionConfig {
    /// Maximum number of ids per batch (floor 1).
    pub batch_size: usize,
    /// Period of the dispatch tick.
    pub tick_interval_ms: u64,
    /// Simulated processing time per batch.
    pub processing_duration_ms: u64,
}

impl IngestionConfig {
    fn from_env() -> Self {
        Self {
            batch_size: env_usize("BATCH_SIZE", 3).max(1),
            tick_interval_ms: env_u64("TICK_INTERVAL_MS", 5000),
            processing_duration_ms: env_u64("PROCESSING_DURATION_MS", 2000),
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn processing_duration(&self) -> Duration {
        Duration::from_millis(self.processing_duration_ms)
    }
}
