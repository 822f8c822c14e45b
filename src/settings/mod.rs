pub mod constants;
pub mod errors;
pub mod impls;
pub mod types;

pub use errors::ConfigurationError;
pub use types::{Settings, ValidatedSettings, ZoneArgs, ZoneOptions};
