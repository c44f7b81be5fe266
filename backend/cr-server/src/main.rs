use cr_server::{AppState, build_router, logger};

use cr_config::Config;
use cr_store::RestStore;

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    let log_file_path = logger::log_file_path(&config.logging)?;
    logger::initialize(&config.logging, log_file_path)?;

    info!("Starting cr-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // One store client for the whole process
    let store = Arc::new(RestStore::from_config(&config.store)?);
    info!("Store client ready: {}", config.store.url);

    let app_state = AppState::new(store, &config)?;
    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
