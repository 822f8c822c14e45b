// Standard library
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

// 3rd party crates
use config::{Config, ConfigError, Environment, File, Map};
use tracing::{debug, error};

// Project imports
use crate::providers::hetzner::types::{ApiToken, HetznerConfig, ZoneCreationRequest};

// Current module imports
use super::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_PATH_ENV, DEFAULT_TTL, ID_ONLY_ENABLED,
};
use super::errors::ConfigurationError;
use super::types::{Settings, ValidatedSettings, ZoneArgs, ZoneOptions};

impl Settings {
    /// Loads settings from the optional config file and the process
    /// environment, then validates them.
    pub fn load() -> Result<ValidatedSettings, ConfigurationError> {
        let (config_path, required) = Self::get_config_path();
        let settings: Settings = Self::load_settings(config_path.as_deref(), required, None)?;

        ValidatedSettings::new(settings).map_err(|e| {
            error!("Configuration validation failed: {}", e);
            e
        })
    }

    /// Determines the configuration file path and whether it must exist.
    ///
    /// A path given through `HETZNER_DNS_CONFIG_PATH` is required, the
    /// per-user default is not.
    fn get_config_path() -> (Option<PathBuf>, bool) {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            (Some(PathBuf::from(path)), true)
        } else {
            let path: Option<PathBuf> = dirs::config_dir()
                .map(|config_dir| config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
            (path, false)
        }
    }

    /// Builds settings from a config file and environment variables.
    ///
    /// `env_vars` replaces the process environment when given. Empty
    /// environment values count as unset.
    pub fn load_settings(
        config_path: Option<&Path>,
        required: bool,
        env_vars: Option<Map<String, String>>,
    ) -> Result<Settings, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = config_path {
            let config_file: &str = path.to_str().ok_or_else(|| {
                let msg: &str = "Configuration file path contains invalid UTF-8 characters";
                error!("{}", msg);
                ConfigError::Message(msg.into())
            })?;
            debug!(path = %config_file, required, "Adding configuration file source");
            builder = builder.add_source(File::with_name(config_file).required(required));
        }

        let settings: Config = builder
            .add_source(Environment::default().ignore_empty(true).source(env_vars))
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_log_level(&self) -> String {
        self.hetzner_dns_log_level.to_lowercase()
    }

    pub fn get_timeout(&self) -> Duration {
        Duration::from_secs(self.hetzner_dns_timeout)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        match self.get_log_level().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => {
                return Err(ConfigurationError::InvalidLogLevel(
                    self.hetzner_dns_log_level.clone(),
                ))
            }
        }

        if self.hetzner_dns_timeout == 0 {
            return Err(ConfigurationError::InvalidTimeout(self.hetzner_dns_timeout));
        }

        let url = self.hetzner_dns_api_url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigurationError::InvalidApiUrl(
                self.hetzner_dns_api_url.clone(),
            ));
        }

        Ok(())
    }

    /// Resolves call-time arguments against these settings.
    ///
    /// Explicit arguments win; settings fill the gaps. Fails before any
    /// network activity when the token or the zone name is missing.
    pub fn resolve(&self, args: ZoneArgs) -> Result<ZoneOptions, ConfigurationError> {
        let token: ApiToken = args
            .token
            .or_else(|| self.hetzner_dns_token.clone().map(ApiToken::new))
            .filter(|token| !token.is_blank())
            .ok_or(ConfigurationError::MissingToken)?;

        let name: String = args
            .name
            .or_else(|| self.name.clone())
            .filter(|name| !name.trim().is_empty())
            .ok_or(ConfigurationError::MissingName)?;

        let ttl: u32 = match (args.ttl, self.ttl.as_deref()) {
            (Some(ttl), _) => ttl,
            (None, Some(raw)) => parse_ttl(raw)?,
            (None, None) => DEFAULT_TTL,
        };

        let id_only: bool = args
            .id_only
            .unwrap_or_else(|| self.id_only.as_deref().map(str::trim) == Some(ID_ONLY_ENABLED));

        let request = ZoneCreationRequest { name, ttl };
        request.validate()?;

        Ok(ZoneOptions {
            provider: HetznerConfig {
                api_url: self.hetzner_dns_api_url.trim().to_string(),
                token,
                timeout: self.get_timeout(),
            },
            request,
            id_only,
        })
    }
}

fn parse_ttl(raw: &str) -> Result<u32, ConfigurationError> {
    match raw.trim().parse::<u32>() {
        Ok(ttl) if ttl > 0 => Ok(ttl),
        _ => Err(ConfigurationError::InvalidTtl(raw.to_string())),
    }
}

// The token must never end up in logs.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field(
                "hetzner_dns_token",
                &self.hetzner_dns_token.as_ref().map(|_| "<redacted>"),
            )
            .field("name", &self.name)
            .field("ttl", &self.ttl)
            .field("id_only", &self.id_only)
            .field("hetzner_dns_api_url", &self.hetzner_dns_api_url)
            .field("hetzner_dns_timeout", &self.hetzner_dns_timeout)
            .field("hetzner_dns_log_level", &self.hetzner_dns_log_level)
            .finish()
    }
}

impl ValidatedSettings {
    pub fn new(settings: Settings) -> Result<Self, ConfigurationError> {
        settings.validate()?;
        Ok(ValidatedSettings(settings))
    }
}

// Implement Deref to allow transparent access to Settings fields
impl std::ops::Deref for ValidatedSettings {
    type Target = Settings;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
