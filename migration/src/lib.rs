pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_user_table;
mod m20260101_000002_create_offline_player_table;
mod m20260101_000003_create_pick_table;
mod m20260101_000004_create_setting_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_user_table::Migration),
            Box::new(m20260101_000002_create_offline_player_table::Migration),
            Box::new(m20260101_000003_create_pick_table::Migration),
            Box::new(m20260101_000004_create_setting_table::Migration),
        ]
    }
}
