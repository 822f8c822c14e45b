// Standard library
use std::fmt;

// 3rd party crates
use async_trait::async_trait;
use serde_json::Value;
use tracing::error;

// Project imports
use crate::providers::DnsProvider;
use crate::settings::errors::ConfigurationError;

// Current module imports
use super::constants::{PROVIDER_NAME, ZONES_PATH};
use super::errors::ZoneError;
use super::functions::send_create_zone;
use super::transport::{ReqwestTransport, ZoneTransport};
use super::types::{
    ApiErrorDetails, ApiToken, HetznerConfig, HetznerDns, ResultValue, ZoneCreationRequest,
    ZoneCreationResponse,
};

impl ApiToken {
    pub fn new(token: impl Into<String>) -> Self {
        ApiToken(token.into())
    }

    /// Raw token, for the auth header only.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(<redacted>)")
    }
}

impl ZoneCreationRequest {
    pub fn new(name: impl Into<String>, ttl: u32) -> Self {
        ZoneCreationRequest {
            name: name.into(),
            ttl,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.name.trim().is_empty() {
            return Err(ConfigurationError::MissingName);
        }

        if self.ttl == 0 {
            return Err(ConfigurationError::InvalidTtl(self.ttl.to_string()));
        }

        Ok(())
    }
}

impl HetznerDns<ReqwestTransport> {
    /// Creates a client backed by a `reqwest` transport.
    pub fn new(config: HetznerConfig) -> Result<Self, ZoneError> {
        let transport = ReqwestTransport::new(&config)?;
        let hetzner = HetznerDns { config, transport };
        hetzner.validate_config()?;
        Ok(hetzner)
    }
}

impl<T: ZoneTransport> HetznerDns<T> {
    pub fn with_transport(config: HetznerConfig, transport: T) -> Self {
        HetznerDns { config, transport }
    }

    pub fn zones_url(&self) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), ZONES_PATH)
    }
}

#[async_trait]
impl<T: ZoneTransport> DnsProvider for HetznerDns<T> {
    type Error = ZoneError;

    async fn create_zone(
        &self,
        request: &ZoneCreationRequest,
    ) -> Result<ZoneCreationResponse, Self::Error> {
        send_create_zone(self, request).await
    }

    fn validate_config(&self) -> Result<(), Self::Error> {
        if self.config.token.is_blank() {
            error!("API token is not set for '{}'", PROVIDER_NAME);
            return Err(ConfigurationError::MissingToken.into());
        }

        if self.config.timeout.is_zero() {
            return Err(ConfigurationError::InvalidTimeout(0).into());
        }

        Ok(())
    }

    fn get_name(&self) -> &str {
        PROVIDER_NAME
    }
}

impl ZoneCreationResponse {
    /// Turns the classified response into the caller's result.
    pub fn into_result(self, id_only: bool) -> Result<ResultValue, ZoneError> {
        match self {
            ZoneCreationResponse::Failure { error } => Err(ZoneError::Api(error)),
            ZoneCreationResponse::Success { zone_id, raw } => {
                if id_only {
                    zone_id
                        .map(ResultValue::ZoneId)
                        .ok_or(ZoneError::ResponseShape("zone.id"))
                } else {
                    Ok(ResultValue::Zone(raw))
                }
            }
        }
    }
}

impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultValue::Zone(value) => write!(f, "{}", value),
            ResultValue::ZoneId(id) => f.write_str(id),
        }
    }
}

/// Shows the provider's message and code when present, else the raw payload.
impl fmt::Display for ApiErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self.payload.get("message").and_then(Value::as_str);
        let code = self.payload.get("code").filter(|code| !code.is_null());

        match (message, code) {
            (Some(message), Some(code)) => {
                write!(f, "{} (code {}, HTTP {})", message, code, self.status)
            }
            (Some(message), None) => write!(f, "{} (HTTP {})", message, self.status),
            _ => write!(f, "{} (HTTP {})", self.payload, self.status),
        }
    }
}
