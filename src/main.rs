mod bot;
mod config;
mod extensions;
mod tests;

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Configure a global tracing subscriber writing to stdout. The DEBUG flag
/// picks the default level; RUST_LOG still overrides it.
fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stdout)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging(config::debug_from_env());

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("[CONFIG] {e}. Exiting.");
            std::process::exit(1);
        }
    };

    tracing::debug!("[CONFIG] Debug mode is on; you can safely ignore this.");

    bot::init::start_bot(&config).await
}
