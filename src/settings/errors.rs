// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("API token is missing: pass it explicitly or set HETZNER_DNS_TOKEN")]
    MissingToken,
    #[error("Zone name is missing: pass it explicitly or set NAME")]
    MissingName,
    #[error("Invalid TTL '{0}': must be a positive integer")]
    InvalidTtl(String),
    #[error("Invalid log level: {0}. Must be one of: error, warn, info, debug, trace")]
    InvalidLogLevel(String),
    #[error("Request timeout must be greater than 0, got {0}")]
    InvalidTimeout(u64),
    #[error("Invalid API URL '{0}': must start with http:// or https://")]
    InvalidApiUrl(String),
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}
