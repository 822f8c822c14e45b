// 3rd party crates
use async_trait::async_trait;

// Project imports
use crate::providers::hetzner::types::{ZoneCreationRequest, ZoneCreationResponse};

/// Core trait that a DNS provider must implement to create zones.
///
/// # Implementation Requirements
///
/// Implementors must provide:
/// - Error type for provider-specific errors
/// - A single-shot zone creation call (no retries)
/// - Configuration validation
///
/// # Example Implementation
///
/// ```rust
/// # use async_trait::async_trait;
/// # use hetzner_dns_zone::providers::DnsProvider;
/// # use hetzner_dns_zone::providers::hetzner::{ZoneCreationRequest, ZoneCreationResponse};
/// # use serde_json::json;
/// struct MyProvider {
///     api_key: String,
/// }
///
/// #[async_trait]
/// impl DnsProvider for MyProvider {
///     type Error = std::io::Error;
///
///     async fn create_zone(
///         &self,
///         request: &ZoneCreationRequest,
///     ) -> Result<ZoneCreationResponse, Self::Error> {
///         Ok(ZoneCreationResponse::Success {
///             zone_id: Some("1".to_string()),
///             raw: json!({"zone": {"id": "1", "name": request.name}}),
///         })
///     }
///
///     fn validate_config(&self) -> Result<(), Self::Error> {
///         if self.api_key.is_empty() {
///             return Err(std::io::Error::other("missing API key"));
///         }
///         Ok(())
///     }
///
///     fn get_name(&self) -> &str {
///         "my_provider"
///     }
/// }
/// ```
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// The error type for this provider.
    ///
    /// Covers configuration, transport and response errors.
    type Error: std::error::Error + Send + Sync;

    /// Creates a zone with exactly one API request.
    ///
    /// # Arguments
    ///
    /// * `request` - Zone name and default TTL
    ///
    /// # Returns
    ///
    /// * `Ok(ZoneCreationResponse)` - The decoded reply, which may still be
    ///   an API-reported failure
    /// * `Err(Self::Error)` - The request could not be sent or decoded
    async fn create_zone(
        &self,
        request: &ZoneCreationRequest,
    ) -> Result<ZoneCreationResponse, Self::Error>;

    /// Validates the provider's configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Configuration is valid
    /// * `Err(Self::Error)` - Configuration is invalid
    fn validate_config(&self) -> Result<(), Self::Error>;

    /// Gets the provider's name, lowercase and without spaces.
    fn get_name(&self) -> &str;
}
