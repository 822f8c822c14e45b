/// Points at an optional TOML file layered under the process environment.
pub const CONFIG_PATH_ENV: &str = "HETZNER_DNS_CONFIG_PATH";

pub const CONFIG_DIR_NAME: &str = "hetzner-dns";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_API_URL: &str = "https://dns.hetzner.com/api/v1";
pub const DEFAULT_TTL: u32 = 86400;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// The only `ID_ONLY` value that switches output to the bare zone id.
pub const ID_ONLY_ENABLED: &str = "1";

