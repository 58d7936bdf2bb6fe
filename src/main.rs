use dotenvy::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use activities::config::Config;
use activities::state::AppState;
use activities::web;

#[tokio::main]
async fn main() {
    // .env is optional
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let state = AppState::from_config(&config);
    info!(
        activities = state.registry.list().len(),
        capacity_policy = %state.registry.capacity_policy(),
        "Activity registry seeded"
    );

    let app = web::router(state, &config.static_dir);

    let listener = match bind(&config).await {
        Ok(l) => l,
        Err(e) => {
            error!("Could not bind listener: {}", e);
            std::process::exit(1);
        }
    };

    match listener.local_addr() {
        Ok(addr) => info!("Server running on http://{}", addr),
        Err(e) => warn!("Server running, local address unknown: {}", e),
    }

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    info!("Server shut down");
}

/// Binds the configured port, falling back to the next one if it is taken.
async fn bind(config: &Config) -> Result<TcpListener, Box<dyn std::error::Error>> {
    let addr = config.addr()?;
    match TcpListener::bind(addr).await {
        Ok(l) => Ok(l),
        Err(e) => {
            let fallback = config.addr_with_port(config.port.saturating_add(1))?;
            warn!("Could not bind {}: {}. Trying fallback {}", addr, e, fallback);
            Ok(TcpListener::bind(fallback).await?)
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install terminate handler: {}", e);
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
}
