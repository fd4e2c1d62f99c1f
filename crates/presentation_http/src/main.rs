//! WeatherBot HTTP Server
//!
//! Main entry point for the interactions webhook and command API.

use std::{future::IntoFuture, sync::Arc, time::Duration};

use application::{CommandService, WeatherService};
use infrastructure::{AppConfig, WeatherAdapter, init_logging};
use integration_discord::{DiscordClient, SignatureVerifier};
use presentation_http::{
    routes,
    shutdown::{DrainOutcome, drain_within},
    state::AppState,
};
use tokio::{net::TcpListener, signal, sync::oneshot};
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    init_logging(&config.logging)?;

    info!("🌤️ WeatherBot v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        host = %config.server.host,
        port = %config.server.port,
        discord = ?config.discord,
        "Configuration loaded"
    );

    // Weather pipeline
    let adapter = Arc::new(
        WeatherAdapter::with_config((&config.weather).into())
            .map_err(|e| anyhow::anyhow!("Failed to initialize weather client: {e}"))?,
    );
    let weather = Arc::new(WeatherService::new(adapter.clone(), adapter));
    let commands = CommandService::new(weather);

    let mut state = AppState::new(
        commands,
        Duration::from_secs(config.discord.alert_cooldown_secs),
    );

    // Discord
    match config.discord.public_key.as_deref() {
        Some(key) => state = state.with_verifier(SignatureVerifier::from_hex(key)?),
        None => warn!("No Discord public key configured, /interactions is disabled"),
    }
    match config.discord.client_config() {
        Some(client_config) => {
            state = state.with_discord_client(DiscordClient::new(client_config)?);
            info!("Interaction replies are deferred and delivered via the REST API");
        },
        None => info!("No Discord application ID configured, replying inline"),
    }

    let app = routes::create_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(RequestBodyLimitLayer::new(config.server.max_body_size_bytes)),
    );

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);
    let (signalled_tx, signalled_rx) = oneshot::channel();

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal(shutdown_timeout).await;
            let _ = signalled_tx.send(());
        })
        .into_future();

    match drain_within(server, signalled_rx, shutdown_timeout).await? {
        DrainOutcome::Drained => info!("👋 Server shutdown complete"),
        DrainOutcome::TimedOut => warn!("👋 Server shutdown forced after {:?}", shutdown_timeout),
    }

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("⏳ Waiting up to {:?} for connections to close...", timeout);
}
