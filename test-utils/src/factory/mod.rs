//! Factories that insert test rows with sensible defaults.
//!
//! Every table gets a factory module with a builder struct for tests that
//! care about particular field values, plus a `create_*` function for the
//! common case where any valid row will do. Foreign keys are passed in as
//! arguments, so the dependency order stays visible in the test itself.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let student = factory::student::create_student(&db).await?;
//!     let equipment = factory::equipment::create_equipment(&db).await?;
//!
//!     // Create with all dependencies
//!     let (equipment, window) = factory::helpers::create_equipment_with_window(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Reach for the builder structs when a test pins down specific values:
//!
//! ```rust,ignore
//! use entity::equipment::EquipmentStatus;
//! use test_utils::factory;
//!
//! let equipment = factory::equipment::EquipmentFactory::new(&db)
//!     .name("Confocal Microscope")
//!     .status(EquipmentStatus::Maintenance)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `laboratory` - Rooms that house equipment
//! - `student` / `teacher` - The two requester kinds
//! - `equipment` - Reservable instruments
//! - `time_window` - Recurring daily availability windows
//! - `reservation` - Reservation applications in any lifecycle status
//! - `helpers` - Whole object graphs wired together in one call

pub mod equipment;
pub mod helpers;
pub mod laboratory;
pub mod reservation;
pub mod student;
pub mod teacher;
pub mod time_window;

// Common create functions, importable without the module path
pub use equipment::create_equipment;
pub use laboratory::create_laboratory;
pub use reservation::{create_student_reservation, create_teacher_reservation};
pub use student::create_student;
pub use teacher::create_teacher;
pub use time_window::create_time_window;
