//! HTTP server command implementation.

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::info;

use itemd::config::{self, Config};
use itemd::server::{self, AppState};
use itemd::service::ItemService;
use itemd::store::CollectionStore;
use itemd::store::file::FileCollectionStore;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub host: Option<IpAddr>,
    pub port: Option<u16>,
    pub data_file: Option<PathBuf>,
    pub public_dir: Option<PathBuf>,
}

pub async fn run(config_path: &str, overrides: Overrides) -> Result<()> {
    let mut config = Config::load(config_path)
        .await
        .with_context(|| format!("failed to load config from {config_path}"))?;

    if let Some(host) = overrides.host {
        config.server.host = host.to_string();
    }
    if let Some(port) = overrides.port {
        config.server.port = port;
    }

    // Paths from the config file are relative to it; CLI paths are taken as given
    let config_path_ref = Path::new(config_path);
    let store_path = overrides
        .data_file
        .unwrap_or_else(|| config::resolve_path(config_path_ref, &config.store.path));
    let public_dir = overrides
        .public_dir
        .unwrap_or_else(|| config::resolve_path(config_path_ref, &config.public_dir));

    let store = FileCollectionStore::new(&store_path);
    store
        .ensure()
        .await
        .with_context(|| format!("failed to initialize item store at {}", store_path.display()))?;

    let state = AppState {
        items: ItemService::new(Arc::new(store)),
        public_dir,
    };
    let app = server::build_app(state, config.server.request_timeout_seconds);

    let ip: IpAddr = config
        .server
        .host
        .parse()
        .with_context(|| format!("invalid listen host '{}'", config.server.host))?;
    let addr = SocketAddr::new(ip, config.server.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(addr = %addr, store = %store_path.display(), "Starting server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
