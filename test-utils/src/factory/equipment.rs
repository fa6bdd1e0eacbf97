//! Equipment factory for creating test equipment entities.
//!
//! This module provides factory methods for creating equipment entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{NaiveDateTime, Utc};
use entity::equipment::{EquipmentCategory, EquipmentStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test equipment with customizable fields.
///
/// Provides a builder pattern for creating equipment entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::equipment::EquipmentFactory;
///
/// let equipment = EquipmentFactory::new(&db)
///     .name("Confocal Microscope")
///     .status(EquipmentStatus::Maintenance)
///     .build()
///     .await?;
/// ```
pub struct EquipmentFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    model: Option<String>,
    lab_id: Option<i32>,
    category: EquipmentCategory,
    status: EquipmentStatus,
    description: Option<String>,
    next_available_at: Option<NaiveDateTime>,
}

impl<'a> EquipmentFactory<'a> {
    /// Creates a new EquipmentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Equipment {id}"` where id is auto-incremented
    /// - model: `None`
    /// - lab_id: `None` (institution-wide device)
    /// - category: `Institution`
    /// - status: `Available`
    /// - description: `Some("Test equipment")`
    /// - next_available_at: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `EquipmentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Equipment {}", id),
            model: None,
            lab_id: None,
            category: EquipmentCategory::Institution,
            status: EquipmentStatus::Available,
            description: Some("Test equipment".to_string()),
            next_available_at: None,
        }
    }

    /// Sets the equipment display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the equipment model designation.
    pub fn model(mut self, model: Option<String>) -> Self {
        self.model = model;
        self
    }

    /// Sets the owning laboratory and switches the category to `Laboratory`.
    pub fn lab(mut self, lab_id: i32) -> Self {
        self.lab_id = Some(lab_id);
        self.category = EquipmentCategory::Laboratory;
        self
    }

    /// Sets the equipment status.
    pub fn status(mut self, status: EquipmentStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the derived next-available instant.
    pub fn next_available_at(mut self, next_available_at: Option<NaiveDateTime>) -> Self {
        self.next_available_at = next_available_at;
        self
    }

    /// Builds and inserts the equipment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::equipment::Model)` - Created equipment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::equipment::Model, DbErr> {
        let now = Utc::now().naive_utc();
        entity::equipment::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            model: ActiveValue::Set(self.model),
            lab_id: ActiveValue::Set(self.lab_id),
            category: ActiveValue::Set(self.category),
            status: ActiveValue::Set(self.status),
            description: ActiveValue::Set(self.description),
            next_available_at: ActiveValue::Set(self.next_available_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an equipment entity with default values.
///
/// Shorthand for `EquipmentFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::equipment::Model)` - Created equipment entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_equipment(db: &DatabaseConnection) -> Result<entity::equipment::Model, DbErr> {
    EquipmentFactory::new(db).build().await
}
