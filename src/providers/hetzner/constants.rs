pub const PROVIDER_NAME: &str = "hetzner";

/// Path of the zone collection, relative to the API base URL.
pub const ZONES_PATH: &str = "zones";

pub const AUTH_HEADER: &str = "Auth-API-Token";

/// Top-level key that only appears in failure payloads.
pub const ERROR_KEY: &str = "error";

/// JSON pointer to the id of a freshly created zone.
pub const ZONE_ID_POINTER: &str = "/zone/id";
