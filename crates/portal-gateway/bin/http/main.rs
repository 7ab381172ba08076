mod cli;

use crate::cli::CLI;
use anyhow::Context;
use clap::Parser;
use portal_gateway::{server, App, AppState, GatewayConfig};
use portal_storage::InMemoryKeyStore;
use portal_telemetry::TelemetryConfig;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // exits with a diagnostic on stderr when the port is missing or invalid
    let cli = CLI::parse();

    let telemetry = TelemetryConfig::builder()
        .format(cli.log_format.into())
        .level(cli.log_level.clone())
        .build();
    portal_telemetry::init(&telemetry)?;

    let config = GatewayConfig::builder()
        .host(cli.host)
        .port(cli.port)
        .request_timeout(cli.request_timeout())
        .build();

    info!(
        listen_addr = %config.listen_addr(),
        request_timeout_secs = cli.request_timeout_secs,
        log_format = %cli.log_format,
        "starting portal gateway"
    );

    let state = AppState::new(Arc::new(InMemoryKeyStore::new()));
    let router = App::router(state, config.request_timeout);

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr()))?;

    server::serve(listener, router).await?;
    Ok(())
}
