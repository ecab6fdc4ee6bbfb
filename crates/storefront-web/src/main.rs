//! Web server for the storefront admin dashboard
#![forbid(unsafe_code)]

use std::net::SocketAddr;
use storefront_core::{Config, Error, Result, init_logging};
use storefront_web::build_app;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (for development convenience)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: .env file not loaded: {e}");
    }

    let config = Config::load();
    let logging = config
        .as_ref()
        .map(|config| config.logging.clone())
        .unwrap_or_default();
    init_logging(&logging)?;

    let config = config.unwrap_or_else(|e| {
        warn!("Failed to load config ({}), using defaults", e);
        Config::default()
    });

    match config.backend.url() {
        Some(url) => info!(backend = %url, "Using storefront backend"),
        None => warn!("No backend URL configured; data pages will show configuration errors"),
    }

    let addr: SocketAddr = config.bind_address().parse().map_err(|e| Error::Configuration {
        message: format!("Invalid server address '{}': {e}", config.bind_address()),
    })?;

    let app = build_app(config);

    info!("Starting storefront admin on http://{}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolve when the process is asked to stop
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
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
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down gracefully..."),
        () = terminate => info!("Received terminate signal, shutting down gracefully..."),
    }
}
