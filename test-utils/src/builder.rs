use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Fluent builder that assembles a [`TestContext`] with the schema a test
/// needs.
///
/// Tables are derived from the SeaORM entity definitions rather than the
/// migrations, so tests stay fast and never depend on migration history.
/// Add entities one by one with `with_table()`, or reach for one of the
/// grouped helpers below.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Laboratory, Equipment};
///
/// let test = TestBuilder::new()
///     .with_table(Laboratory)
///     .with_table(Equipment)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements collected so far, executed in insertion order
    /// by `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Starts a builder with no tables selected.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Queues one entity's table for creation.
    ///
    /// The statement is rendered with SQLite syntax since every test context
    /// runs on `sqlite::memory:`. Add referenced tables before the tables
    /// that point at them so foreign keys resolve.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity whose table should exist in the test schema
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Queues the tables for equipment and time-window operations.
    ///
    /// Adds, in dependency order:
    /// - Laboratory
    /// - Equipment
    /// - TimeWindow
    ///
    /// Use this when the test never touches reservations; otherwise use
    /// `with_reservation_tables()`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_equipment_tables(self) -> Self {
        self.with_table(Laboratory)
            .with_table(Equipment)
            .with_table(TimeWindow)
    }

    /// Queues the full reservation schema.
    ///
    /// Adds, in dependency order:
    /// - Laboratory
    /// - Student
    /// - Teacher
    /// - Equipment
    /// - TimeWindow
    /// - Reservation
    ///
    /// Any test exercising the reservation lifecycle, conflict checks, or
    /// availability computation wants this one.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_reservation_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_reservation_tables(self) -> Self {
        self.with_table(Laboratory)
            .with_table(Student)
            .with_table(Teacher)
            .with_table(Equipment)
            .with_table(TimeWindow)
            .with_table(Reservation)
    }

    /// Opens the in-memory database and creates every queued table.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with connection open and schema in place
    /// - `Err(TestError::Database)` - Connecting or a CREATE TABLE failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
