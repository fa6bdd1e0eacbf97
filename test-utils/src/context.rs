use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Environment for a single test, backed by its own in-memory SQLite database.
///
/// The connection is opened lazily on first access and lives until the
/// context is dropped, so every test works against a private schema and can
/// run in parallel with the rest of the suite.
pub struct TestContext {
    /// Connection to the private in-memory database.
    ///
    /// `None` until `database()` is first called; tests that never touch the
    /// database never open a connection.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    /// Creates a context with no connection yet.
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Returns the database connection, opening it on first call.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Live connection to this context's database
    /// - `Err(TestError::Database)` - The in-memory instance could not be opened
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Runs the given CREATE TABLE statements against this context's database.
    ///
    /// `TestBuilder::build()` calls this with statements derived from the
    /// entity definitions; tests rarely need to call it directly.
    ///
    /// # Arguments
    /// - `stmts` - CREATE TABLE statements to execute, in order
    ///
    /// # Returns
    /// - `Ok(())` - Schema created
    /// - `Err(TestError::Database)` - A statement failed to execute
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}
