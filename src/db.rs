use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use sea_orm_migration::MigratorTrait;

use crate::error::AppResult;

/// Pool reaping horizon for in-memory databases; long enough to never elapse.
const KEEP_ALIVE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

pub async fn connect_and_migrate(
    database_url: &str,
    max_connections: u32,
) -> AppResult<DatabaseConnection> {
    let in_memory = database_url.contains(":memory:");

    let mut opt = ConnectOptions::new(database_url.to_string());
    // every pooled connection to `:memory:` would get its own empty database,
    // and reaping the only connection would drop the schema and every row
    if in_memory {
        opt.max_connections(1)
            .min_connections(1)
            .idle_timeout(KEEP_ALIVE)
            .max_lifetime(KEEP_ALIVE);
    } else {
        opt.max_connections(max_connections.max(1));
    }
    opt.connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    if !in_memory {
        db.execute(Statement::from_string(
            db.get_database_backend(),
            "PRAGMA journal_mode=WAL".to_string(),
        ))
        .await?;

        db.execute(Statement::from_string(
            db.get_database_backend(),
            "PRAGMA synchronous=NORMAL".to_string(),
        ))
        .await?;
    }

    migration::Migrator::up(&db, None).await?;
    tracing::info!(in_memory, "database connected, migrations applied");

    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_pool_keeps_its_single_connection() {
        let db = connect_and_migrate("sqlite::memory:", 5).await.unwrap();
        let options = db.get_sqlite_connection_pool().options();

        assert_eq!(options.get_max_connections(), 1);
        assert_eq!(options.get_idle_timeout(), Some(KEEP_ALIVE));
        assert_eq!(options.get_max_lifetime(), Some(KEEP_ALIVE));
    }
}
