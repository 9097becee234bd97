use crate::clock::Clock;
use crate::db::connection::{DbPool, get_pool_stats};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{Duration, interval};

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(db: DbPool, clock: Arc<dyn Clock>) -> Self {
        AppState { db, clock }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}

/// Periodically checks a connection out of the pool so a dead database
/// shows up in the logs before the next request hits it.
pub fn spawn_pool_health_check(db: DbPool, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = interval(every);
        loop {
            interval.tick().await;
            match db.acquire().await {
                Ok(conn) => {
                    drop(conn);
                    debug!("{}", get_pool_stats(&db));
                }
                Err(e) => {
                    error!("Database connection health check failed: {}", e);
                }
            }
        }
    })
}
