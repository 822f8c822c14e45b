// Standard library
use std::time::Duration;

// 3rd party crates
use serde::Serialize;
use serde_json::Value;

// Current module imports
use super::transport::ReqwestTransport;

/// Opaque Hetzner DNS API token. Its `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(pub(super) String);

/// Connection settings for the Hetzner DNS API.
#[derive(Debug, Clone)]
pub struct HetznerConfig {
    /// Base URL without the trailing `/zones`
    pub api_url: String,
    pub token: ApiToken,
    pub timeout: Duration,
}

/// Body of the zone creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneCreationRequest {
    pub name: String,
    pub ttl: u32,
}

/// Represents a client for interacting with the Hetzner DNS API.
#[derive(Debug, Clone)]
pub struct HetznerDns<T = ReqwestTransport> {
    pub config: HetznerConfig,
    pub transport: T,
}

/// Status and undecoded body of an HTTP response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// A decoded zone creation response, classified once by the presence of
/// the `error` key.
#[derive(Debug, Clone, PartialEq)]
pub enum ZoneCreationResponse {
    Success { zone_id: Option<String>, raw: Value },
    Failure { error: ApiErrorDetails },
}

/// The error payload reported by the API, passed through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiErrorDetails {
    pub status: u16,
    pub payload: Value,
}

/// What a successful call hands back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultValue {
    /// The whole decoded response
    Zone(Value),
    /// Only `zone.id`
    ZoneId(String),
}
