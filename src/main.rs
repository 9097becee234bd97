use polls_site::clock::SystemClock;
use polls_site::config::Config;
use polls_site::startup::{AppState, spawn_pool_health_check};
use polls_site::{db, routes};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    // initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    let pool = db::init_db(&config.database_url).await?;
    info!("database ready at {}", config.database_url);
    spawn_pool_health_check(pool.clone(), Duration::from_secs(60));

    let app = routes::app(AppState::new(pool, Arc::new(SystemClock)));

    info!("listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
