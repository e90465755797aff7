use ft_server::{build_router, config::Config, logger, state::AppState};

use std::error::Error;

use log::info;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load configuration from the environment
    let config = Config::from_env()?;

    // Initialize logger (before any other logging)
    logger::initialize(config.log_level, config.log_colored)?;

    info!("Starting ft-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Connect and migrate
    info!("Connecting to database: {}", config.database_path);
    let pool = ft_db::connect(&config.database_path).await?;
    info!("Database ready");

    // Build application state and router
    let state = AppState::new(pool, config.jwt_secret.as_bytes());
    let app = build_router(state);

    // Create TCP listener
    let listener = TcpListener::bind(&config.bind_addr).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                log::error!("Failed to listen for SIGINT: {}", e);
            } else {
                info!("Received SIGINT (Ctrl+C), shutting down");
            }
        })
        .await?;

    Ok(())
}
