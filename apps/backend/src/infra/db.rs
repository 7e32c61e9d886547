use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

use crate::error::AppError;

/// Open a connection pool for `url`. Does NOT run migrations.
pub async fn connect_db(url: &str) -> Result<DatabaseConnection, AppError> {
    let mut options = ConnectOptions::new(url.to_owned());
    if url.contains(":memory:") {
        // each pooled connection would otherwise see its own empty database
        options.max_connections(1).min_connections(1);
    }

    let conn = Database::connect(options).await?;
    info!(backend = ?conn.get_database_backend(), "database connected");
    Ok(conn)
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(url: &str) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(url).await?;
    Migrator::up(&conn, None).await?;
    Ok(conn)
}
