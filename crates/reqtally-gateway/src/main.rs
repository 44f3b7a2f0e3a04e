//! reqtally gateway binary.
//!
//! - Loads strict YAML config (path from argv[1], default `reqtally.yaml`)
//! - Builds one `MetricsAggregator` and shares it through `AppState`
//! - Serves the metrics endpoint until Ctrl+C / SIGTERM

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use reqtally_core::error::{Result, ReqTallyError};
use reqtally_core::MetricsAggregator;
use reqtally_gateway::{app_state, config, router};

const DEFAULT_CONFIG_PATH: &str = "reqtally.yaml";

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = run().await {
        tracing::error!(code = e.client_code().as_str(), error = %e, "reqtally-gateway failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.gateway.listen_addr()?;
    let metrics_path = cfg.metrics.path.clone();

    let metrics = Arc::new(MetricsAggregator::new());
    let state = app_state::AppState::new(cfg, metrics)?;
    let app = router::build_router(state);

    tracing::info!(%listen, %metrics_path, "reqtally-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| ReqTallyError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ReqTallyError::Internal(format!("server failed: {e}")))?;

    tracing::info!("reqtally-gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
