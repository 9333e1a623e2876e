//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

#[cfg(feature = "mongodb")]
use std::time::Duration;

#[cfg(feature = "mongodb")]
use larder_infra::database::DatabaseConfig;

use crate::telemetry::TelemetryConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    #[cfg(feature = "mongodb")]
    pub database: Option<DatabaseConfig>,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_var("PORT").unwrap_or(3000),
            #[cfg(feature = "mongodb")]
            database: Self::database_from_env(),
            telemetry: TelemetryConfig::from_env(),
        }
    }

    /// `MONGO_URI` switches the store on; everything else tunes the pool.
    #[cfg(feature = "mongodb")]
    fn database_from_env() -> Option<DatabaseConfig> {
        let url = env::var("MONGO_URI").ok().filter(|u| !u.trim().is_empty())?;
        let mut config = DatabaseConfig::new(url.trim());

        config.database = env::var("MONGO_DB_NAME").ok();
        config.app_name = Some("recipe-api".to_string());
        if let Some(max) = parse_var("MONGO_MAX_POOL_SIZE") {
            config.max_pool_size = max;
        }
        if let Some(min) = parse_var("MONGO_MIN_POOL_SIZE") {
            config.min_pool_size = min;
        }
        if let Some(secs) = parse_var("MONGO_SERVER_SELECTION_TIMEOUT_SECS") {
            config.server_selection_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_var("MONGO_CONNECT_TIMEOUT_SECS") {
            config.connect_timeout = Duration::from_secs(secs);
        }

        Some(config)
    }
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}
