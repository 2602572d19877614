//! SecureClaim Review - API Server Binary
//!
//! This binary starts the HTTP API for claim submission and fraud review.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin secureclaim-api
//!
//! # Deterministic heuristic scoring without artificial latency
//! API_SCORING_PROVIDER=heuristic API_SCORING_LATENCY_MS=0 cargo run --bin secureclaim-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_SCORING_PROVIDER` - `random` or `heuristic` (default: random)
//! * `API_SCORING_LATENCY_MS` - Simulated scoring delay (default: 1200)
//! * `API_SCORING_SEED` - Seed for the random scorer (default: unseeded)

use anyhow::Context;
use interface_api::{config::ApiConfig, create_router, middleware::log_finalized, AppState};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("invalid API_* configuration")?;

    init_tracing(&config.log_level);

    let state = AppState::from_config(config.clone());

    tracing::info!(
        host = %config.host,
        port = %config.port,
        scoring_provider = %state.service.scorer_name(),
        scoring_latency_ms = config.scoring_latency_ms,
        "Starting SecureClaim review API"
    );

    tokio::spawn(log_finalized(state.service.subscribe_finalized()));

    let app = create_router(state);

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
