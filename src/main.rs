//! Mock responder binary.
//!
//! With no arguments, serves HTTP on 9090 and HTTPS on 9443 until
//! interrupted. `--https` serves only the HTTPS listener.

use clap::Parser;

use mock_responder::cli::Cli;
use mock_responder::config::ResponderConfig;
use mock_responder::lifecycle::{self, signals, Shutdown};
use mock_responder::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = ResponderConfig::from_cli(cli);

    logging::init_logging(&config.observability);

    tracing::info!("mock-responder v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::debug!(
        mode = ?config.listener.mode,
        http_port = config.listener.http_port,
        https_port = config.listener.https_port,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    let running = lifecycle::launch(config, &shutdown).await?;

    if !running.is_serving() {
        tracing::warn!("No listener is running, exiting");
        return Ok(());
    }

    tracing::info!("Press Ctrl+C to stop");

    tokio::select! {
        _ = signals::wait_for_signal() => {}
        result = running.wait() => return result.map_err(Into::into),
    }

    tracing::info!("Stopping mock servers...");
    shutdown.trigger();
    Ok(())
}
