//! Domain models for recurring availability windows.
//!
//! A time window is a daily-recurring interval (time-of-day only, not bound
//! to a calendar date) during which its equipment may be reserved.

use chrono::{NaiveDateTime, NaiveTime};

/// Recurring daily availability window for one piece of equipment.
///
/// Invariant: `start_of_day < end_of_day`. Windows of the same equipment
/// never overlap in time-of-day, regardless of the `active` flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    /// Unique identifier for the window.
    pub id: i32,
    /// Equipment this window belongs to.
    pub equipment_id: i32,
    /// Start of the window, wall-clock time-of-day.
    pub start_of_day: NaiveTime,
    /// End of the window, wall-clock time-of-day (exclusive).
    pub end_of_day: NaiveTime,
    /// Whether the window currently participates in availability checks.
    pub active: bool,
    /// Timestamp when the window was created.
    pub created_at: NaiveDateTime,
}

impl TimeWindow {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `TimeWindow` - The converted domain model
    pub fn from_entity(entity: entity::time_window::Model) -> Self {
        Self {
            id: entity.id,
            equipment_id: entity.equipment_id,
            start_of_day: entity.start_of_day,
            end_of_day: entity.end_of_day,
            active: entity.active,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a new availability window.
///
/// Times arrive as raw strings (`HH:MM` or `HH:MM:SS`) and are normalized to
/// whole seconds by the service before validation and storage.
#[derive(Debug, Clone)]
pub struct CreateTimeWindowParams {
    /// Equipment the window belongs to.
    pub equipment_id: i32,
    /// Window start, `HH:MM` or `HH:MM:SS`.
    pub start_of_day: String,
    /// Window end, `HH:MM` or `HH:MM:SS`.
    pub end_of_day: String,
    /// Whether the window starts out active.
    pub active: bool,
}

/// Parameters for updating an existing availability window.
///
/// All fields are optional - only provided fields will be updated. Range and
/// overlap are re-validated only when the provided times actually differ from
/// the stored values.
#[derive(Debug, Clone, Default)]
pub struct UpdateTimeWindowParams {
    /// New equipment to attach the window to, if re-targeting.
    pub equipment_id: Option<i32>,
    /// New window start, `HH:MM` or `HH:MM:SS`.
    pub start_of_day: Option<String>,
    /// New window end, `HH:MM` or `HH:MM:SS`.
    pub end_of_day: Option<String>,
    /// New active flag.
    pub active: Option<bool>,
}
