// Standard library
use std::process::ExitCode;

// 3rd party crates
use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

// Project imports
use hetzner_dns_zone::run;
use hetzner_dns_zone::settings::constants::DEFAULT_LOG_LEVEL;
use hetzner_dns_zone::settings::{Settings, ZoneArgs};

/// Creates one Hetzner DNS zone from environment variables.
///
/// Reads `HETZNER_DNS_TOKEN`, `NAME`, `TTL` and `ID_ONLY`, sends a single
/// request and prints either the full JSON response or only the zone id.
/// Any failure is logged to stderr and ends with a non-zero exit status.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // loads the .env file from the current directory or parents.
    dotenvy::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            setup_logging(DEFAULT_LOG_LEVEL);
            error!("Failed to load settings: {}", e);
            return ExitCode::FAILURE;
        }
    };

    setup_logging(&settings.get_log_level());
    info!("⚙️ Settings have been loaded.");

    match run(ZoneArgs::default(), &settings).await {
        Ok(result) => {
            println!("{}", result);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Zone creation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout only ever carries the result.
fn setup_logging(log_level: &str) {
    let directives: String = format!(
        "{},hyper_util=error,reqwest=error,hyper=error,rustls=error",
        log_level
    );

    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .parse_lossy(directives);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}
