use sea_orm::DatabaseConnection;

use crate::server::{config::Config, error::AppError, service::auth::AuthService};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date before any request
/// is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the superuser from `SUPERUSER_USERNAME` / `SUPERUSER_PASSWORD` when none exists yet.
///
/// Logs a warning instead when no superuser exists and the credentials are not configured,
/// since the admin endpoints are unusable until one is created.
pub async fn bootstrap_superuser(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    AuthService::new(db)
        .ensure_superuser(
            config.superuser_username.as_deref(),
            config.superuser_password.as_deref(),
        )
        .await?;

    Ok(())
}
