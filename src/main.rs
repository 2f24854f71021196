// src/main.rs
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use krishi_bills_backend::config::Config;
use krishi_bills_backend::store::PgBillStore;
use krishi_bills_backend::{build_app, database, AppState};

#[tokio::main]
async fn main() {
    // Load environment variables before the filter reads RUST_LOG
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    let db_pool = match database::create_pool(&config.database).await {
        Ok(p) => p,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create database pool");
            std::process::exit(1);
        }
    };

    if config.database.auto_create_schema {
        if let Err(e) = database::ensure_schema(&db_pool).await {
            tracing::error!(error = %e, "Failed to prepare bills table");
            std::process::exit(1);
        }
    }

    let store = PgBillStore::new(db_pool.clone());
    let app_state = AppState::new(Arc::new(store), config.numeric_policy);
    let app = build_app(app_state, &config.allowed_origins);

    let host: IpAddr = match config.server.host.parse() {
        Ok(h) => h,
        Err(e) => {
            tracing::warn!(host = %config.server.host, error = %e, "Invalid HOST, using 0.0.0.0");
            IpAddr::from([0, 0, 0, 0])
        }
    };
    let base_port = config.server.port;

    // Try base_port..base_port+20 to avoid crash when address is in use
    let listener = {
        let mut bound = None;
        for offset in 0u16..=20 {
            let port = base_port.saturating_add(offset);
            let addr = SocketAddr::from((host, port));
            match TcpListener::bind(addr).await {
                Ok(l) => {
                    bound = Some((l, addr));
                    break;
                }
                Err(e) => {
                    if offset == 0 {
                        tracing::warn!(%addr, error = %e, "Port in use, trying next");
                    }
                }
            }
        }
        match bound {
            Some((l, addr)) => {
                tracing::info!("Server running on {}", addr);
                l
            }
            None => {
                tracing::error!(
                    "Failed to bind to any port starting at {} on {}",
                    base_port,
                    host
                );
                db_pool.close().await;
                std::process::exit(1);
            }
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
    }

    db_pool.close().await;
    tracing::info!("Database pool closed, bye");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
