use hm_db::ConnectionManager;
use hm_server::{AppState, build_router, logger};

use std::error::Error;
use std::time::Duration;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        return Err(e.into());
    }

    // Load and validate configuration
    let config = hm_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting hm-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open database and bring schema up to date
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = ConnectionManager::new(database_path, config.database.max_connections)
        .connect()
        .await?;
    info!("Database ready");

    let session_ttl = Duration::from_secs(config.server.session_ttl_secs);
    let app = build_router(AppState::with_session_ttl(pool.clone(), session_ttl));

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            warn!("Server will run until the process is killed");
            std::future::pending::<()>().await;
        }
    }
}
