use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{error, info};

use gallery_service::{
    config::Config,
    routes,
    storage::MongoPaintingStore,
    AppState,
};
use shared::database::MongoConnection;
use shared::observability::init_logging;

const SERVICE_NAME: &str = "gallery-service";

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    init_logging(config.logging.to_log_config(SERVICE_NAME))
        .context("Failed to initialize logging")?;

    info!("Starting Gallery Service v{}", env!("CARGO_PKG_VERSION"));

    // Every startup failure is fatal: log it, then exit non-zero
    if let Err(e) = run(config).await {
        error!("{:#}", e);
        return Err(e);
    }

    Ok(())
}

async fn run(config: Config) -> Result<()> {
    let connection = MongoConnection::connect(config.mongo.clone())
        .await
        .context("Failed to connect to MongoDB")?;

    let state = AppState::new(Arc::new(MongoPaintingStore::new(&connection)));
    let app = routes::build_router(state, &config.server);

    let addr = config.server.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Gallery Service listening on http://{}", addr);
    info!("Serving static assets from {}", config.server.assets_dir.display());

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error");

    connection.disconnect().await;
    served?;

    info!("Gallery Service shut down gracefully");
    Ok(())
}

// Graceful shutdown handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to register SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
