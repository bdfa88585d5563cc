//! Account service configuration.

use std::env;

use common::{DatabaseConfig, ServiceConfig};

const SERVICE_NAME: &str = "account-service";

/// Account service configuration.
#[derive(Debug, Clone)]
pub struct AccountServiceConfig {
    pub service: ServiceConfig,
    pub database: DatabaseConfig,
}

impl AccountServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a local `.env` file.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            service: ServiceConfig {
                service_name: SERVICE_NAME.to_string(),
                log_level: env::var("RUST_LOG").unwrap_or(defaults.service.log_level),
            },
            database: DatabaseConfig {
                url: env::var("ACCOUNT_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.database.url),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.database.max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.database.min_connections),
            },
        }
    }
}

impl Default for AccountServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: SERVICE_NAME.to_string(),
                ..ServiceConfig::default()
            },
            database: DatabaseConfig::default(),
        }
    }
}
