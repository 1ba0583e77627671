mod user_repo;

use crate::sqlx_repo::user_repo::SQLxUserRepo;
use crate::user_repo::UserRepo;
use crate::HealthCheck;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("Unable to connect to database")]
    Connect(#[source] sqlx::Error),
    #[error("Database did not pass the liveness check")]
    LivenessCheck,
}

/// Opens a connection pool and verifies that the database answers before handing out the repo.
pub async fn create_repo(
    database_url: &str,
    max_pool_size: u32,
) -> Result<Arc<dyn UserRepo>, ConnectionError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_pool_size)
        .connect(database_url)
        .await
        .map_err(ConnectionError::Connect)?;

    let user_repo = SQLxUserRepo::new(pool);
    if !user_repo.check().await {
        return Err(ConnectionError::LivenessCheck);
    }
    info!("Successfully connected to database");

    Ok(Arc::new(user_repo))
}
