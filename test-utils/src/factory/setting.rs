//! Setting factory for seeding test configuration values.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a key/value setting row.
pub async fn create_setting(
    db: &DatabaseConnection,
    key: impl Into<String>,
    value: impl Into<String>,
) -> Result<entity::setting::Model, DbErr> {
    entity::setting::ActiveModel {
        key: ActiveValue::Set(key.into()),
        value: ActiveValue::Set(value.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
