//! HTTP server entry point for the employee presence log.

use std::error::Error;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use presence_log::api::{AppState, create_router};
use presence_log::config::ConfigLoader;

/// Installs the global `fmt` subscriber.
///
/// `RUST_LOG` wins over the configured filter when set.
fn init_tracing(log_filter: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).try_init()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let loader = ConfigLoader::from_env()?;
    let config = loader.config();

    if let Err(err) = init_tracing(&config.log_filter) {
        eprintln!("failed to install tracing subscriber: {err}");
    }

    let router = create_router(AppState::new());
    let listener = TcpListener::bind(&config.bind_address).await?;
    info!(address = %listener.local_addr()?, "Presence log listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Presence log stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(err) => {
            // Without a signal handler, keep serving until the process is killed.
            warn!(error = %err, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    }
}
