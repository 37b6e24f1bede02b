use rand::{distr::Alphanumeric, Rng};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing::info;

use crate::{
    config::Config,
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, NotificationPreference},
    service::auth::hash_password,
};

/// Connects to the Sqlite database and runs pending migrations.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the same Sqlite database.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();

    let store = SqliteStore::new(pool.clone());
    store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    let layer = SessionManagerLayer::new(store)
        .with_expiry(Expiry::OnInactivity(Duration::days(30)));

    Ok(layer)
}

/// Creates the initial admin account when no admin exists yet.
///
/// The generated password is logged once; the admin should change it
/// after first login.
pub async fn seed_admin(db: &DatabaseConnection) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.admin_exists().await? {
        return Ok(());
    }

    let password: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(16)
        .map(char::from)
        .collect();

    let admin = user_repo
        .create(CreateUserParam {
            username: "admin".to_string(),
            email: "admin@localhost".to_string(),
            phone: None,
            notification_preference: NotificationPreference::Email,
            password_hash: hash_password(&password)?,
            is_admin: true,
            draft_position: None,
        })
        .await?;

    info!(
        username = %admin.username,
        password = %password,
        "Created initial admin account, change the password after first login"
    );

    Ok(())
}
