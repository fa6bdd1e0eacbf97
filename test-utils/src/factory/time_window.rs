//! Time-window factory for creating recurring availability windows.

use chrono::{NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test time windows with customizable fields.
///
/// Windows default to the 09:00-17:00 working day, active. Override the
/// range or the flag for schedule-shape scenarios.
pub struct TimeWindowFactory<'a> {
    db: &'a DatabaseConnection,
    equipment_id: i32,
    start_of_day: NaiveTime,
    end_of_day: NaiveTime,
    active: bool,
}

impl<'a> TimeWindowFactory<'a> {
    /// Creates a new TimeWindowFactory with default values.
    ///
    /// Defaults:
    /// - start_of_day: `09:00:00`
    /// - end_of_day: `17:00:00`
    /// - active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `equipment_id` - Equipment the window belongs to
    ///
    /// # Returns
    /// - `TimeWindowFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, equipment_id: i32) -> Self {
        Self {
            db,
            equipment_id,
            start_of_day: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_of_day: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            active: true,
        }
    }

    /// Sets the window's start and end times of day.
    pub fn range(mut self, start_of_day: NaiveTime, end_of_day: NaiveTime) -> Self {
        self.start_of_day = start_of_day;
        self.end_of_day = end_of_day;
        self
    }

    /// Sets whether the window is active.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the time-window entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::time_window::Model)` - Created time-window entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::time_window::Model, DbErr> {
        entity::time_window::ActiveModel {
            id: ActiveValue::NotSet,
            equipment_id: ActiveValue::Set(self.equipment_id),
            start_of_day: ActiveValue::Set(self.start_of_day),
            end_of_day: ActiveValue::Set(self.end_of_day),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active 09:00-17:00 window for the given equipment.
///
/// Shorthand for `TimeWindowFactory::new(db, equipment_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `equipment_id` - Equipment the window belongs to
///
/// # Returns
/// - `Ok(entity::time_window::Model)` - Created time-window entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_time_window(
    db: &DatabaseConnection,
    equipment_id: i32,
) -> Result<entity::time_window::Model, DbErr> {
    TimeWindowFactory::new(db, equipment_id).build().await
}
