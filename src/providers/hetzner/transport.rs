// 3rd party crates
use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Client;
use tracing::{debug, error};

// Current module imports
use super::constants::AUTH_HEADER;
use super::errors::ZoneError;
use super::types::{HetznerConfig, RawResponse, ZoneCreationRequest};

/// Sends the single zone creation request.
///
/// Implementations perform exactly one attempt per call and never retry.
#[async_trait]
pub trait ZoneTransport: Send + Sync {
    async fn post_json(
        &self,
        url: &str,
        body: &ZoneCreationRequest,
    ) -> Result<RawResponse, ZoneError>;
}

/// `reqwest` backed transport carrying the auth and content type headers.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &HetznerConfig) -> Result<Self, ZoneError> {
        Ok(ReqwestTransport {
            client: create_reqwest_client(config)?,
        })
    }
}

/// Creates a reqwest client with the headers the Hetzner DNS API expects.
fn create_reqwest_client(config: &HetznerConfig) -> Result<Client, ZoneError> {
    let mut headers: HeaderMap = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    // Mark security-sensitive headers with `set_sensitive`.
    let mut auth_value: HeaderValue =
        HeaderValue::from_str(config.token.expose()).map_err(|e| {
            error!("Invalid API token format: {}", e);
            ZoneError::InvalidHeaderValue(e)
        })?;
    auth_value.set_sensitive(true);
    headers.insert(AUTH_HEADER, auth_value);

    let client: Client = Client::builder()
        .default_headers(headers)
        .timeout(config.timeout)
        .build()
        .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            ZoneError::HttpClientBuild(e)
        })?;

    Ok(client)
}

#[async_trait]
impl ZoneTransport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        body: &ZoneCreationRequest,
    ) -> Result<RawResponse, ZoneError> {
        debug!(url = %url, "Sending zone creation request");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ZoneError::Transport {
                url: url.to_string(),
                source: Box::new(e),
            })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| ZoneError::Transport {
            url: url.to_string(),
            source: Box::new(e),
        })?;

        debug!(status, bytes = body.len(), "Received zone creation response");

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}
