//! Create a zone through the Hetzner DNS API.
//!
//! Parameters come from explicit [`ZoneArgs`] first and fall back to
//! [`Settings`] loaded from the environment. One POST request is sent and
//! the reply is either the full zone object or just its id.

pub mod providers;
pub mod settings;

// Project imports
use crate::providers::hetzner::functions::create_zone;
use crate::providers::hetzner::types::HetznerDns;
use crate::providers::hetzner::{ResultValue, ZoneError};
use crate::settings::{Settings, ZoneArgs};

/// Resolves the arguments against the settings and creates the zone.
///
/// Configuration problems are reported before any network activity.
pub async fn run(args: ZoneArgs, settings: &Settings) -> Result<ResultValue, ZoneError> {
    let options = settings.resolve(args)?;
    let hetzner = HetznerDns::new(options.provider)?;

    create_zone(&hetzner, &options.request, options.id_only).await
}
