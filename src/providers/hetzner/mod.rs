//! Hetzner DNS provider.
//!
//! Creates zones through `POST <api_url>/zones`, authenticating with the
//! `Auth-API-Token` header. The response body, not the HTTP status, decides
//! success: any payload with an `error` key is a failure.

pub mod constants;
pub mod errors;
pub mod functions;
pub mod impls;
pub mod transport;
pub mod types;

pub use errors::ZoneError;
pub use types::{ApiToken, HetznerDns, ResultValue, ZoneCreationRequest, ZoneCreationResponse};
