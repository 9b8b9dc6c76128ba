//! Configuration management

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tickle_common::TickleError;

// ============================================================================
// Server Configuration Constants
// ============================================================================

/// Default server host binding.
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default server port.
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default shutdown timeout in seconds.
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Default tickle repo database URL for local development.
pub const DEFAULT_DATABASE_URL: &str = "postgresql://localhost/ticklerepo";

/// Default maximum database connections in the pool.
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Default minimum database connections in the pool.
pub const DEFAULT_DATABASE_MIN_CONNECTIONS: u32 = 1;

/// Default database connection timeout in seconds.
pub const DEFAULT_DATABASE_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default database idle timeout in seconds (10 minutes).
pub const DEFAULT_DATABASE_IDLE_TIMEOUT_SECS: u64 = 600;

/// Default flow store base URL for local development.
pub const DEFAULT_FLOWSTORE_URL: &str = "http://localhost:8081/dataio/flow-store-service";

/// Default tickle harvester base URL for local development.
pub const DEFAULT_TICKLE_HARVESTER_URL: &str = "http://localhost:8082/dataio/harvester/tickle-repo";

/// Harvester config type listed by `GET /harvesters`.
pub const DEFAULT_HARVESTER_CONFIG_TYPE: &str =
    "dk.dbc.dataio.harvester.types.TickleRepoHarvesterConfig";

/// Default transport timeout for calls to the external services, in seconds.
pub const DEFAULT_SERVICE_TIMEOUT_SECS: u64 = 30;

/// Default CORS allowed origin for local development.
pub const DEFAULT_CORS_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub services: ServicesConfig,
    pub cors: CorsConfig,
    /// Deployment label echoed by `GET /instance`
    pub instance: String,
}

/// Server-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub shutdown_timeout_secs: u64,
}

/// Tickle repo database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

/// External collaborators reached over HTTP
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    pub flowstore_url: String,
    pub tickle_harvester_url: String,
    pub harvester_config_type: String,
    pub timeout_secs: u64,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allow_credentials: bool,
}

/// Read `name` from the environment, falling back to `default` when unset.
///
/// A value that is set but does not parse is an error rather than a silent default.
fn env_or<T: FromStr>(name: &str, default: T) -> Result<T, TickleError> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| TickleError::invalid_env(name, &value)),
        Err(_) => Ok(default),
    }
}

fn env_string(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

impl Config {
    /// Load configuration from environment and defaults
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Config {
            server: ServerConfig {
                host: env_string("TICKLE_HOST", DEFAULT_SERVER_HOST),
                port: env_or("TICKLE_PORT", DEFAULT_SERVER_PORT)?,
                shutdown_timeout_secs: env_or(
                    "TICKLE_SHUTDOWN_TIMEOUT",
                    DEFAULT_SHUTDOWN_TIMEOUT_SECS,
                )?,
            },
            database: DatabaseConfig {
                url: env_string("DATABASE_URL", DEFAULT_DATABASE_URL),
                max_connections: env_or(
                    "DATABASE_MAX_CONNECTIONS",
                    DEFAULT_DATABASE_MAX_CONNECTIONS,
                )?,
                min_connections: env_or(
                    "DATABASE_MIN_CONNECTIONS",
                    DEFAULT_DATABASE_MIN_CONNECTIONS,
                )?,
                connect_timeout_secs: env_or(
                    "DATABASE_CONNECT_TIMEOUT",
                    DEFAULT_DATABASE_CONNECT_TIMEOUT_SECS,
                )?,
                idle_timeout_secs: env_or(
                    "DATABASE_IDLE_TIMEOUT",
                    DEFAULT_DATABASE_IDLE_TIMEOUT_SECS,
                )?,
            },
            services: ServicesConfig {
                flowstore_url: env_string("FLOWSTORE_URL", DEFAULT_FLOWSTORE_URL),
                tickle_harvester_url: env_string(
                    "TICKLE_HARVESTER_URL",
                    DEFAULT_TICKLE_HARVESTER_URL,
                ),
                harvester_config_type: env_string(
                    "HARVESTER_CONFIG_TYPE",
                    DEFAULT_HARVESTER_CONFIG_TYPE,
                ),
                timeout_secs: env_or("SERVICE_TIMEOUT", DEFAULT_SERVICE_TIMEOUT_SECS)?,
            },
            cors: CorsConfig {
                allowed_origins: env_string("CORS_ALLOWED_ORIGINS", DEFAULT_CORS_ALLOWED_ORIGIN)
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
                allow_credentials: env_or("CORS_ALLOW_CREDENTIALS", false)?,
            },
            instance: env_string("INSTANCE", ""),
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Server port must be greater than 0");
        }

        if self.database.url.is_empty() {
            anyhow::bail!("Database URL cannot be empty");
        }

        if self.database.max_connections == 0 {
            anyhow::bail!("Database max_connections must be greater than 0");
        }

        if self.database.min_connections > self.database.max_connections {
            anyhow::bail!(
                "Database min_connections ({}) cannot be greater than max_connections ({})",
                self.database.min_connections,
                self.database.max_connections
            );
        }

        if self.services.flowstore_url.trim().is_empty() {
            anyhow::bail!("FLOWSTORE_URL cannot be empty");
        }

        if self.services.tickle_harvester_url.trim().is_empty() {
            anyhow::bail!("TICKLE_HARVESTER_URL cannot be empty");
        }

        if self.cors.allowed_origins.is_empty() {
            tracing::warn!("No CORS origins configured - all origins will be allowed");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_SERVER_HOST.to_string(),
                port: DEFAULT_SERVER_PORT,
                shutdown_timeout_secs: DEFAULT_SHUTDOWN_TIMEOUT_SECS,
            },
            database: DatabaseConfig {
                url: DEFAULT_DATABASE_URL.to_string(),
                max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
                min_connections: DEFAULT_DATABASE_MIN_CONNECTIONS,
                connect_timeout_secs: DEFAULT_DATABASE_CONNECT_TIMEOUT_SECS,
                idle_timeout_secs: DEFAULT_DATABASE_IDLE_TIMEOUT_SECS,
            },
            services: ServicesConfig {
                flowstore_url: DEFAULT_FLOWSTORE_URL.to_string(),
                tickle_harvester_url: DEFAULT_TICKLE_HARVESTER_URL.to_string(),
                harvester_config_type: DEFAULT_HARVESTER_CONFIG_TYPE.to_string(),
                timeout_secs: DEFAULT_SERVICE_TIMEOUT_SECS,
            },
            cors: CorsConfig {
                allowed_origins: vec![DEFAULT_CORS_ALLOWED_ORIGIN.to_string()],
                allow_credentials: false,
            },
            instance: String::new(),
        }
    }
}
