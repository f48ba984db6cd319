pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod patch;
pub mod repositories;
pub mod routes;
pub mod validation;

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::Config;

/// Shared by every request. `db` is a pool: each request checks out its own
/// connection or opens its own transaction.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: DatabaseConnection,
}

impl AppState {
    pub async fn from_config(config: Config) -> anyhow::Result<Arc<Self>> {
        let db = db::connect_and_migrate(&config.database_url, config.db_max_connections).await?;
        Ok(Arc::new(Self { config: Arc::new(config), db }))
    }
}
