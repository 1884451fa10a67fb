use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use crate::{config::Config, error::AppError, service::password};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Seeds an admin account when none exists.
///
/// The first boot of a fresh database has no way to log in as an admin, so an
/// admin user is created from the `ADMIN_USERNAME`/`ADMIN_EMAIL`/`ADMIN_PASSWORD`
/// configuration. If an admin already exists this is a no-op. If no admin
/// password is configured, seeding is skipped with a warning rather than
/// inventing a credential.
///
/// # Arguments
/// - `db` - Database connection
/// - `config` - Application configuration with the admin seed values
///
/// # Returns
/// - `Ok(())` - Admin present or seeded (or skipped with a warning)
/// - `Err(AppError)` - Database or password hashing failure
pub async fn ensure_admin(db: &sea_orm::DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let admin_count = entity::prelude::User::find()
        .filter(entity::user::Column::Role.eq(entity::user::Role::Admin))
        .count(db)
        .await?;

    if admin_count > 0 {
        return Ok(());
    }

    let Some(admin_password) = config.admin_password.as_deref() else {
        tracing::warn!("No admin user exists and ADMIN_PASSWORD is not set; skipping admin seeding");
        return Ok(());
    };

    let password_hash = password::hash_password(admin_password)?;

    entity::user::ActiveModel {
        id: ActiveValue::NotSet,
        username: ActiveValue::Set(config.admin_username.clone()),
        email: ActiveValue::Set(config.admin_email.clone()),
        role: ActiveValue::Set(entity::user::Role::Admin),
        password_hash: ActiveValue::Set(password_hash),
        vehicle_number: ActiveValue::Set(None),
        phone_number: ActiveValue::Set(None),
    }
    .insert(db)
    .await?;

    tracing::info!("Seeded admin user '{}'", config.admin_username);

    Ok(())
}
