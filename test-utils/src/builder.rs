use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts with a configurable database schema.
///
/// Add entity tables with `with_table()`, then call `build()` to get a
/// `TestContext` with an in-memory SQLite database ready to use.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Pick};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Pick)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements generated from entity models, executed in
    /// insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys should be added after the tables they
    /// reference.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all four pool tables in dependency order.
    ///
    /// Use this for tests spanning draft rotation or standings, which touch
    /// users, offline players, picks, and settings together.
    pub fn with_pool_tables(self) -> Self {
        self.with_table(User)
            .with_table(OfflinePlayer)
            .with_table(Pick)
            .with_table(Setting)
    }

    /// Builds the test context and creates the configured tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
