//! API configuration

use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

use domain_assessment::{ScoringBackend, ScoringProvider};

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Which scoring provider to run
    pub scoring_provider: ScoringBackend,
    /// Artificial scoring delay in milliseconds, 0 to disable
    pub scoring_latency_ms: u64,
    /// Seed for the random scorer, for reproducible demos
    pub scoring_seed: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            scoring_provider: ScoringBackend::Random,
            scoring_latency_ms: 1200,
            scoring_seed: None,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn scoring_latency(&self) -> Duration {
        Duration::from_millis(self.scoring_latency_ms)
    }

    /// Builds the configured scoring provider
    pub fn build_scorer(&self) -> Arc<dyn ScoringProvider> {
        self.scoring_provider
            .build(self.scoring_latency(), self.scoring_seed)
    }
}
