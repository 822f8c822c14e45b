pub mod hetzner;
pub mod traits;

pub use traits::DnsProvider;
