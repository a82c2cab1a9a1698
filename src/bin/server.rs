//! # Commerce Core Server
//!
//! Thin wrapper binary for running the storefront API as a standalone server.
//! This is the production deployment target for the commerce backend.
//!
//! ## Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin server
//!
//! # Run with specific environment
//! COMMERCE_ENV=production COMMERCE_PORT=8080 cargo run --bin server
//! ```

use std::env;
use tokio::signal;
use tracing::info;

use commerce_core::config::AppConfig;
use commerce_core::logging;
use commerce_core::web::state::AppState;
use commerce_core::web::create_app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging first
    logging::init_structured_logging();

    info!("🚀 Starting Commerce Core Server...");
    info!("   Version: {}", env!("CARGO_PKG_VERSION"));
    info!(
        "   Build Mode: {}",
        if cfg!(debug_assertions) {
            "Debug"
        } else {
            "Release"
        }
    );

    let environment = env::var("COMMERCE_ENV").ok();
    info!(
        "   Environment: {}",
        environment.as_deref().unwrap_or("development")
    );

    let config = AppConfig::load()?;
    let address = config.bind_address();

    info!("   Stock Mode: {:?}", config.stock_mode);

    let app = create_app(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!("🎉 Commerce Core Server started successfully!");
    info!("   Listening on: http://{address}");
    info!("   Press Ctrl+C to shutdown gracefully");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Commerce Core Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C");
        },
        _ = terminate => {
            info!("Received SIGTERM");
        },
    }
}
