//! Domain models for equipment data operations.

use chrono::NaiveDateTime;

pub use entity::equipment::{EquipmentCategory, EquipmentStatus};

/// A reservable instrument, institution-wide or owned by one laboratory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equipment {
    /// Unique identifier for the equipment.
    pub id: i32,
    /// Display name of the equipment.
    pub name: String,
    /// Optional model designation.
    pub model: Option<String>,
    /// Owning laboratory; `None` means institution-wide.
    pub lab_id: Option<i32>,
    /// Ownership category (institution or laboratory).
    pub category: EquipmentCategory,
    /// Operational status (disabled, available, in use, maintenance).
    pub status: EquipmentStatus,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Derived next-available instant; recomputed, never authored by hand.
    pub next_available_at: Option<NaiveDateTime>,
    /// Timestamp when the equipment was created.
    pub created_at: NaiveDateTime,
    /// Timestamp of the last column update.
    pub updated_at: NaiveDateTime,
}

impl Equipment {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Equipment` - The converted domain model
    pub fn from_entity(entity: entity::equipment::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            model: entity.model,
            lab_id: entity.lab_id,
            category: entity.category,
            status: entity.status,
            description: entity.description,
            next_available_at: entity.next_available_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for registering a new piece of equipment.
///
/// `next_available_at` is deliberately absent: it is derived state owned by
/// the availability calculator.
#[derive(Debug, Clone)]
pub struct CreateEquipmentParams {
    /// Display name of the equipment.
    pub name: String,
    /// Optional model designation.
    pub model: Option<String>,
    /// Owning laboratory; `None` means institution-wide.
    pub lab_id: Option<i32>,
    /// Ownership category (institution or laboratory).
    pub category: EquipmentCategory,
    /// Initial operational status.
    pub status: EquipmentStatus,
    /// Optional free-text description.
    pub description: Option<String>,
}

/// Parameters for updating an existing piece of equipment.
///
/// All fields are optional - only provided fields will be updated. The outer
/// `Option` indicates field presence, the inner one the nullable value.
#[derive(Debug, Clone, Default)]
pub struct UpdateEquipmentParams {
    /// New display name.
    pub name: Option<String>,
    /// New model designation.
    pub model: Option<Option<String>>,
    /// New owning laboratory.
    pub lab_id: Option<Option<i32>>,
    /// New ownership category.
    pub category: Option<EquipmentCategory>,
    /// New operational status.
    pub status: Option<EquipmentStatus>,
    /// New description.
    pub description: Option<Option<String>>,
}

/// Filter and pagination parameters for listing equipment.
#[derive(Debug, Clone)]
pub struct EquipmentFilter {
    /// Restrict to one laboratory.
    pub lab_id: Option<i32>,
    /// Restrict to one operational status.
    pub status: Option<EquipmentStatus>,
    /// Restrict to one ownership category.
    pub category: Option<EquipmentCategory>,
    /// Substring match against the display name.
    pub keyword: Option<String>,
    /// Page number (0-indexed).
    pub page: u64,
    /// Number of items per page.
    pub per_page: u64,
}

impl Default for EquipmentFilter {
    fn default() -> Self {
        Self {
            lab_id: None,
            status: None,
            category: None,
            keyword: None,
            page: 0,
            per_page: 10,
        }
    }
}
