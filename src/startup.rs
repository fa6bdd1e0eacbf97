use crate::{config::Config, error::AppError};

/// Opens the reservation database and brings its schema up to date.
///
/// Builds a connection pool from the configured URL, then applies any
/// pending migrations before returning. Nothing else in the crate touches
/// migration state, so a successful return means the repositories can rely
/// on the full schema being present.
///
/// # Arguments
/// - `config` - Configuration carrying the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Pool with all migrations applied
/// - `Err(AppError)` - Connecting failed or a migration did not apply
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
