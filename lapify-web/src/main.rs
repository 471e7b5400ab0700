//! lapify-web - laptop catalog service
//!
//! Loads the catalog from the configured sheet (or the fallback dataset),
//! then serves the viewer, the admin view, and their JSON API.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lapify_web::api::BuildInfo;
use lapify_web::config::{Args, Config, ConfigFile};
use lapify_web::services::{load_catalog, Recommender, SheetClient};
use lapify_web::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Read before tracing starts so the TOML log level applies
    let config = Config::load(&args).context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let build = BuildInfo::current();
    info!(
        "Starting lapify-web v{} [{}] built {} ({})",
        build.version, build.git_hash, build.build_timestamp, build.build_profile
    );
    match &config.file {
        ConfigFile::Loaded(path) => info!("Loaded TOML configuration from {:?}", path),
        ConfigFile::Missing(path) => warn!("Config file {:?} not found, using defaults", path),
        ConfigFile::Unresolved => warn!("Could not determine config directory, using defaults"),
    }
    info!(
        sheet_id = %config.source.sheet_id,
        tab = %config.source.tab_name,
        admin_gate = !config.admin_key.is_empty(),
        recommender = config.recommender.api_key.is_some(),
        "Configuration resolved"
    );

    let sheets =
        SheetClient::new(config.sheets_base_url.clone()).context("Failed to build sheet client")?;
    let recommender = Recommender::new(config.recommender.clone())
        .context("Failed to build recommendation client")?;

    let catalog = load_catalog(&sheets, &config.source).await;
    info!(
        count = catalog.laptops.len(),
        fallback = catalog.is_fallback(),
        "Initial catalog ready"
    );

    let state = AppState::new(catalog, sheets, recommender, config.admin_key.clone());
    let app = build_router(state);

    let addr = SocketAddr::new(config.bind, config.port);
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
