use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// A single test's database.
///
/// Each context owns its own in-memory SQLite database, so tests never observe each
/// other's rows. The database lives as long as the context; dropping it discards all
/// data.
pub struct TestContext {
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Opens a fresh, empty in-memory database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Connected context with no tables
    /// - `Err(TestError::Database)` - SQLite connection failed
    pub async fn connect() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self { db })
    }

    /// Executes CREATE TABLE statements in order.
    ///
    /// Usually called by `TestBuilder::build()`.
    pub async fn create_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
