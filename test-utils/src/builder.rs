use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Declares which tables a test needs before its database is created.
///
/// Tables are generated from the SeaORM entities, not from the migrations, so a test
/// only pays for the tables it asks for.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new().with_guild_tables().build().await?;
/// let db = &test.db;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds the table of a single entity.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        self.tables
            .push(Schema::new(DbBackend::Sqlite).create_table_from_entity(entity));
        self
    }

    /// Adds `users`, `guilds`, `guild_emojis` and `guild_bans`.
    ///
    /// None of them carry foreign keys, so order does not matter.
    pub fn with_guild_tables(self) -> Self {
        self.with_table(User)
            .with_table(Guild)
            .with_table(GuildEmoji)
            .with_table(GuildBan)
    }

    /// Connects a fresh in-memory database and creates the declared tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Database with every declared table created
    /// - `Err(TestError::Database)` - Connection or CREATE TABLE failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::connect().await?;

        context.create_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
