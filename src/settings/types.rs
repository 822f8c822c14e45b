// 3rd party crates
use serde::Deserialize;

// Project imports
use crate::providers::hetzner::types::{ApiToken, HetznerConfig, ZoneCreationRequest};

// Current module imports
use super::constants::{DEFAULT_API_URL, DEFAULT_LOG_LEVEL, DEFAULT_TIMEOUT_SECS};

/// Raw settings as read from the config file and the environment.
///
/// Keys are the lower-cased names of the environment variables, so
/// `HETZNER_DNS_TOKEN` lands in `hetzner_dns_token` and `NAME` in `name`.
/// Zone parameters stay as strings until [`Settings::resolve`] turns them
/// into typed options.
#[derive(Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub hetzner_dns_token: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub ttl: Option<String>,

    #[serde(default)]
    pub id_only: Option<String>,

    #[serde(default = "default_api_url")]
    pub hetzner_dns_api_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub hetzner_dns_timeout: u64,

    #[serde(default = "default_log_level")]
    pub hetzner_dns_log_level: String,
}

/// Settings that passed [`Settings::validate`].
pub struct ValidatedSettings(pub(super) Settings);

/// Call-time arguments. Each one that is set takes precedence over the
/// matching setting.
#[derive(Debug, Clone, Default)]
pub struct ZoneArgs {
    pub token: Option<ApiToken>,
    pub name: Option<String>,
    pub ttl: Option<u32>,
    pub id_only: Option<bool>,
}

/// Fully resolved input for one zone creation.
#[derive(Debug, Clone)]
pub struct ZoneOptions {
    pub provider: HetznerConfig,
    pub request: ZoneCreationRequest,
    pub id_only: bool,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            hetzner_dns_token: None,
            name: None,
            ttl: None,
            id_only: None,
            hetzner_dns_api_url: default_api_url(),
            hetzner_dns_timeout: default_timeout(),
            hetzner_dns_log_level: default_log_level(),
        }
    }
}
