//! Shared test tooling for the labreserve workspace.
//!
//! Everything the data and service tests need to stand up a database lives
//! here: a fluent [`builder::TestBuilder`] that derives schema from the
//! entity definitions, the [`context::TestContext`] it produces (one private
//! in-memory SQLite instance per test), and [`factory`] builders that insert
//! rows with sensible defaults.
//!
//! A test picks the tables it needs and builds:
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_equipment() -> Result<(), DbErr> {
//!     let test = TestBuilder::new()
//!         .with_equipment_tables()
//!         .build()
//!         .await
//!         .unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     factory::equipment::create_equipment(db).await?;
//!     // exercise the repository under test...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
