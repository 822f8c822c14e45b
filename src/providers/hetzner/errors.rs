// Standard library
use std::error::Error as StdError;

// 3rd party crates
use thiserror::Error;

// Project imports
use crate::settings::errors::ConfigurationError;

// Current module imports
use super::types::ApiErrorDetails;

/// Everything that can stop a zone from being created.
#[derive(Debug, Error)]
pub enum ZoneError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("HTTP client error: {0}")]
    HttpClientBuild(#[source] reqwest::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("Malformed response body: {0}")]
    ResponseFormat(String),

    #[error("API reported an error: {0}")]
    Api(ApiErrorDetails),

    #[error("Response is missing the '{0}' field")]
    ResponseShape(&'static str),
}
