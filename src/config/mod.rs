use crate::core::{AppError, AppResult};
use serde::Deserialize;
use std::env;
use std::str::FromStr;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub webservice: WebserviceConfig,
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Connection settings for the PrestaShop webservice
#[derive(Debug, Clone, Deserialize)]
pub struct WebserviceConfig {
    /// Base shop URL; the client appends `/api`
    pub base_url: String,
    /// Webservice key, used as basic-auth username with an empty password
    pub ws_key: String,
    pub request_timeout_secs: u64,
}

/// Tunables for batching, pagination ceilings and output size
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    pub character_limit: usize,
    pub batch_size: usize,
    pub max_concurrent_batches: usize,
    pub max_date_range_days: i64,
    /// Pagination safety ceiling for unbounded queries
    pub max_results_unfiltered: usize,
    /// Pagination safety ceiling when a narrowing filter bounds the query
    pub max_results_filtered: usize,
}

fn parse_env<T: FromStr>(name: &str, default: &str) -> AppResult<T> {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| AppError::configuration(format!("Invalid {}", name)))
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            server: ServerConfig::from_env()?,
            webservice: WebserviceConfig {
                base_url: env::var("PRESTASHOP_BASE_URL").map_err(|_| {
                    AppError::configuration("PRESTASHOP_BASE_URL not set")
                })?,
                ws_key: env::var("PRESTASHOP_WS_KEY")
                    .map_err(|_| AppError::configuration("PRESTASHOP_WS_KEY not set"))?,
                request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS", "30")?,
            },
            limits: LimitsConfig {
                character_limit: parse_env("CHARACTER_LIMIT", "25000")?,
                batch_size: parse_env("BATCH_SIZE", "50")?,
                max_concurrent_batches: parse_env("MAX_CONCURRENT_BATCHES", "5")?,
                max_date_range_days: parse_env("MAX_DATE_RANGE_DAYS", "730")?,
                max_results_unfiltered: parse_env("MAX_RESULTS_UNFILTERED", "10000")?,
                max_results_filtered: parse_env("MAX_RESULTS_FILTERED", "50000")?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> AppResult<()> {
        if self.webservice.base_url.trim().is_empty() {
            return Err(AppError::configuration("PRESTASHOP_BASE_URL is empty"));
        }

        if self.webservice.ws_key.len() != 32 {
            return Err(AppError::configuration(
                "PRESTASHOP_WS_KEY must be exactly 32 characters",
            ));
        }

        if self.limits.batch_size == 0 {
            return Err(AppError::configuration(
                "Batch size must be greater than 0",
            ));
        }

        if self.limits.max_concurrent_batches == 0 {
            return Err(AppError::configuration(
                "Max concurrent batches must be greater than 0",
            ));
        }

        if self.limits.character_limit == 0 {
            return Err(AppError::configuration(
                "Character limit must be greater than 0",
            ));
        }

        if self.limits.max_date_range_days <= 0 {
            return Err(AppError::configuration(
                "Max date range days must be greater than 0",
            ));
        }

        Ok(())
    }
}
