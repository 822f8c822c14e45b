// 3rd party crates
use serde_json::Value;
use tracing::{debug, info, warn};

// Current module imports
use super::constants::{ERROR_KEY, ZONE_ID_POINTER};
use super::errors::ZoneError;
use super::transport::ZoneTransport;
use super::types::{
    ApiErrorDetails, HetznerDns, RawResponse, ResultValue, ZoneCreationRequest,
    ZoneCreationResponse,
};

/// Creates a zone and shapes the outcome for the caller.
///
/// Performs one request. With `id_only` the result is the new zone's id,
/// otherwise the full decoded response.
pub async fn create_zone<T: ZoneTransport>(
    hetzner: &HetznerDns<T>,
    request: &ZoneCreationRequest,
    id_only: bool,
) -> Result<ResultValue, ZoneError> {
    let response = send_create_zone(hetzner, request).await?;
    let result = response.into_result(id_only)?;

    info!(zone = %request.name, "Zone created");
    Ok(result)
}

/// Sends the creation request and classifies the reply.
pub(super) async fn send_create_zone<T: ZoneTransport>(
    hetzner: &HetznerDns<T>,
    request: &ZoneCreationRequest,
) -> Result<ZoneCreationResponse, ZoneError> {
    request.validate()?;

    let url = hetzner.zones_url();
    info!(zone = %request.name, ttl = request.ttl, "Creating DNS zone");

    let raw = hetzner.transport.post_json(&url, request).await?;
    let response = parse_zone_response(&raw)?;

    if let ZoneCreationResponse::Failure { error } = &response {
        warn!(
            zone = %request.name,
            status = error.status,
            "API rejected zone creation: {}",
            error
        );
    }

    Ok(response)
}

/// Decodes a raw response as UTF-8 JSON and classifies it.
pub fn parse_zone_response(raw: &RawResponse) -> Result<ZoneCreationResponse, ZoneError> {
    let text = std::str::from_utf8(&raw.body)
        .map_err(|e| ZoneError::ResponseFormat(format!("body is not valid UTF-8: {}", e)))?;

    let payload: Value = serde_json::from_str(text).map_err(|e| {
        debug!(status = raw.status, body = %text, "Undecodable response body");
        ZoneError::ResponseFormat(format!("body is not valid JSON: {}", e))
    })?;

    if !payload.is_object() {
        return Err(ZoneError::ResponseFormat(format!(
            "expected a JSON object, got: {}",
            payload
        )));
    }

    Ok(classify_response(raw.status, payload))
}

/// Any top-level `error` key marks a failure, whatever its value. A non-2xx
/// status without one is a failure too, carrying the whole body as details.
fn classify_response(status: u16, payload: Value) -> ZoneCreationResponse {
    if let Some(error) = payload.get(ERROR_KEY) {
        return ZoneCreationResponse::Failure {
            error: ApiErrorDetails {
                status,
                payload: error.clone(),
            },
        };
    }

    if !(200..300).contains(&status) {
        return ZoneCreationResponse::Failure {
            error: ApiErrorDetails { status, payload },
        };
    }

    let zone_id = payload
        .pointer(ZONE_ID_POINTER)
        .and_then(Value::as_str)
        .map(str::to_owned);

    ZoneCreationResponse::Success {
        zone_id,
        raw: payload,
    }
}
