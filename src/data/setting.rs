//! Settings repository: the flat key/value configuration store.

use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::setting::Setting;

/// Repository for key/value settings.
pub struct SettingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the stored value for a key, or None when the key has never
    /// been set. Defaults are the caller's business.
    pub async fn get(&self, key: &str) -> Result<Option<String>, DbErr> {
        let entity = entity::prelude::Setting::find()
            .filter(entity::setting::Column::Key.eq(key))
            .one(self.db)
            .await?;

        Ok(entity.map(|s| s.value))
    }

    /// Upserts a setting: created on first set, updated in place after.
    pub async fn set(&self, key: &str, value: &str) -> Result<Setting, DbErr> {
        let entity = entity::prelude::Setting::insert(entity::setting::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value.to_string()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::setting::Column::Key)
                .update_column(entity::setting::Column::Value)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Setting::from_entity(entity))
    }

    /// Returns every stored setting, ordered by key.
    pub async fn all(&self) -> Result<Vec<Setting>, DbErr> {
        let entities = entity::prelude::Setting::find()
            .order_by_asc(entity::setting::Column::Key)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Setting::from_entity).collect())
    }
}
