//! Configuration management for the agricultural operations backend
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AGRI_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::SelectionPolicy;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Climate archive configuration
    pub climate: ClimateConfig,

    /// Sowing planner configuration
    pub planner: PlannerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClimateConfig {
    /// Daily climate archive endpoint
    pub archive_url: String,

    /// Days per archive request; a year is fetched as several concurrent chunks
    pub chunk_days: usize,

    /// Timeout for fetching a whole climate year, in seconds
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlannerConfig {
    /// Shortlist size when the request does not give one
    pub default_top_n: usize,

    /// Adaptive threshold search start, in thousandths
    pub start_threshold_millis: u32,

    /// Adaptive threshold search floor, in thousandths
    pub floor_threshold_millis: u32,
}

impl PlannerConfig {
    pub fn selection_policy(&self) -> SelectionPolicy {
        SelectionPolicy {
            start_threshold_millis: self.start_threshold_millis,
            floor_threshold_millis: self.floor_threshold_millis,
        }
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("AGRI_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("climate.archive_url", "https://archive-api.open-meteo.com/v1/archive")?
            .set_default("climate.chunk_days", 92)?
            .set_default("climate.request_timeout_secs", 30)?
            .set_default("planner.default_top_n", 10)?
            .set_default("planner.start_threshold_millis", 999)?
            .set_default("planner.floor_threshold_millis", 400)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGRI_ prefix)
            .add_source(
                Environment::with_prefix("AGRI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for ClimateConfig {
    fn default() -> Self {
        Self {
            archive_url: "https://archive-api.open-meteo.com/v1/archive".to_string(),
            chunk_days: 92,
            request_timeout_secs: 30,
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        let policy = SelectionPolicy::default();
        Self {
            default_top_n: 10,
            start_threshold_millis: policy.start_threshold_millis,
            floor_threshold_millis: policy.floor_threshold_millis,
        }
    }
}
