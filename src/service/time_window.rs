//! Service for recurring availability windows.
//!
//! Windows of one piece of equipment must never overlap in time-of-day,
//! whether active or not; every mutation here re-establishes that invariant
//! before touching the database.

use chrono::{NaiveTime, Utc};
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::cache::{Cache, CacheKey};
use crate::data::equipment::EquipmentRepository;
use crate::data::reservation::ReservationRepository;
use crate::data::time_window::TimeWindowRepository;
use crate::error::AppError;
use crate::model::time_window::{CreateTimeWindowParams, TimeWindow, UpdateTimeWindowParams};
use crate::util::time::{normalize_time_of_day, ranges_overlap};

/// Service for managing daily availability windows.
pub struct TimeWindowService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a dyn Cache,
}

impl<'a> TimeWindowService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a dyn Cache) -> Self {
        Self { db, cache }
    }

    /// Lists the availability windows of one piece of equipment.
    ///
    /// # Arguments
    /// - `equipment_id` - The equipment ID
    /// - `only_active` - Whether to exclude deactivated windows
    ///
    /// # Returns
    /// - `Ok(Vec<TimeWindow>)` - Windows ordered by start-of-day
    /// - `Err(AppError::NotFound)` - Equipment not found
    pub async fn list(
        &self,
        equipment_id: i32,
        only_active: bool,
    ) -> Result<Vec<TimeWindow>, AppError> {
        self.ensure_equipment_exists(equipment_id).await?;

        Ok(TimeWindowRepository::new(self.db)
            .get_by_equipment(equipment_id, only_active)
            .await?)
    }

    /// Creates a new availability window.
    ///
    /// # Arguments
    /// - `params` - Equipment, raw `HH:MM`/`HH:MM:SS` times, active flag
    ///
    /// # Returns
    /// - `Ok(TimeWindow)` - The created window
    /// - `Err(AppError::Invalid)` - Malformed times or start not before end
    /// - `Err(AppError::NotFound)` - Equipment not found
    /// - `Err(AppError::Conflict)` - Overlaps an existing window of the same
    ///   equipment; the detail payload names the offending window
    pub async fn create(&self, params: CreateTimeWindowParams) -> Result<TimeWindow, AppError> {
        let start_of_day = normalize_time_of_day(&params.start_of_day)?;
        let end_of_day = normalize_time_of_day(&params.end_of_day)?;
        if start_of_day >= end_of_day {
            return Err(AppError::invalid(format!(
                "window start {} must be before window end {}",
                start_of_day, end_of_day
            )));
        }

        self.ensure_equipment_exists(params.equipment_id).await?;
        self.ensure_no_overlap(params.equipment_id, start_of_day, end_of_day, None)
            .await?;

        let window = TimeWindowRepository::new(self.db)
            .create(params.equipment_id, start_of_day, end_of_day, params.active)
            .await?;

        self.cache
            .delete(&CacheKey::WindowList(params.equipment_id).to_string())
            .await;

        Ok(window)
    }

    /// Updates an availability window.
    ///
    /// Range ordering and overlap are re-validated only when the effective
    /// start/end actually differ from the stored values, so toggling `active`
    /// on a window never trips over its own range. Re-targeting to another
    /// piece of equipment re-validates that equipment and its windows.
    ///
    /// # Arguments
    /// - `id` - The window ID
    /// - `params` - Fields to update; absent fields keep their stored value
    ///
    /// # Returns
    /// - `Ok(TimeWindow)` - The updated window
    /// - `Err(AppError::NotFound)` - Window or target equipment not found
    /// - `Err(AppError::Invalid)` - Malformed times or start not before end
    /// - `Err(AppError::Conflict)` - Overlapping window, or reservations
    ///   still depend on the stored range
    pub async fn update(
        &self,
        id: i32,
        params: UpdateTimeWindowParams,
    ) -> Result<TimeWindow, AppError> {
        let repository = TimeWindowRepository::new(self.db);

        let stored = repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Time window {} not found", id)))?;

        let new_start = params
            .start_of_day
            .as_deref()
            .map(normalize_time_of_day)
            .transpose()?;
        let new_end = params
            .end_of_day
            .as_deref()
            .map(normalize_time_of_day)
            .transpose()?;

        let start_of_day = new_start.unwrap_or(stored.start_of_day);
        let end_of_day = new_end.unwrap_or(stored.end_of_day);
        let target_equipment_id = params.equipment_id.unwrap_or(stored.equipment_id);

        let range_changed =
            start_of_day != stored.start_of_day || end_of_day != stored.end_of_day;
        let retargeted = target_equipment_id != stored.equipment_id;

        if retargeted {
            self.ensure_equipment_exists(target_equipment_id).await?;
        }
        if range_changed && start_of_day >= end_of_day {
            return Err(AppError::invalid(format!(
                "window start {} must be before window end {}",
                start_of_day, end_of_day
            )));
        }
        if range_changed || retargeted {
            self.ensure_no_overlap(target_equipment_id, start_of_day, end_of_day, Some(id))
                .await?;
        }

        // A move that only widens the range keeps every dependent
        // reservation inside the window, so it needs no guard.
        let widened_only =
            start_of_day <= stored.start_of_day && stored.end_of_day <= end_of_day;
        if retargeted || (range_changed && !widened_only) {
            self.ensure_no_dependents(&stored).await?;
        }

        let window = repository
            .update(id, params.equipment_id, new_start, new_end, params.active)
            .await?;

        self.cache
            .delete(&CacheKey::WindowList(stored.equipment_id).to_string())
            .await;
        if retargeted {
            self.cache
                .delete(&CacheKey::WindowList(target_equipment_id).to_string())
                .await;
        }

        Ok(window)
    }

    /// Deletes an availability window.
    ///
    /// # Arguments
    /// - `id` - The window ID
    ///
    /// # Returns
    /// - `Ok(())` - Window deleted
    /// - `Err(AppError::NotFound)` - Window not found
    /// - `Err(AppError::Conflict)` - Pending or approved future reservations
    ///   still fall inside the window
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repository = TimeWindowRepository::new(self.db);

        let stored = repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Time window {} not found", id)))?;

        self.ensure_no_dependents(&stored).await?;

        repository.delete(id).await?;

        self.cache
            .delete(&CacheKey::WindowList(stored.equipment_id).to_string())
            .await;

        Ok(())
    }

    async fn ensure_equipment_exists(&self, equipment_id: i32) -> Result<(), AppError> {
        EquipmentRepository::new(self.db)
            .get_by_id(equipment_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", equipment_id)))?;

        Ok(())
    }

    /// Checks the candidate range against every window of the equipment,
    /// deactivated ones included. Inactive windows are dormant, not gone;
    /// letting a new window overlap one would make reactivation unsafe.
    async fn ensure_no_overlap(
        &self,
        equipment_id: i32,
        start_of_day: NaiveTime,
        end_of_day: NaiveTime,
        exclude_window_id: Option<i32>,
    ) -> Result<(), AppError> {
        let windows = TimeWindowRepository::new(self.db)
            .get_by_equipment(equipment_id, false)
            .await?;

        for window in windows {
            if Some(window.id) == exclude_window_id {
                continue;
            }
            if ranges_overlap(
                start_of_day,
                end_of_day,
                window.start_of_day,
                window.end_of_day,
            ) {
                return Err(AppError::conflict(
                    format!(
                        "window {} to {} overlaps existing window {}",
                        start_of_day, end_of_day, window.id
                    ),
                    json!({
                        "window_id": window.id,
                        "start_of_day": window.start_of_day.format("%H:%M:%S").to_string(),
                        "end_of_day": window.end_of_day.format("%H:%M:%S").to_string(),
                    }),
                ));
            }
        }

        Ok(())
    }

    /// Refuses the mutation while pending or approved reservations with a
    /// future end still fall inside the stored window's time-of-day range.
    async fn ensure_no_dependents(&self, window: &TimeWindow) -> Result<(), AppError> {
        let now = Utc::now().naive_utc();
        let active = ReservationRepository::new(self.db)
            .find_active_by_equipment(window.equipment_id, Some(now), None)
            .await?;

        let dependent_count = active
            .iter()
            .filter(|reservation| match (reservation.start_at, reservation.end_at) {
                (Some(start_at), Some(end_at)) => {
                    window.start_of_day <= start_at.time() && end_at.time() <= window.end_of_day
                }
                _ => false,
            })
            .count();

        if dependent_count > 0 {
            return Err(AppError::conflict(
                format!(
                    "time window {} has {} dependent reservations",
                    window.id, dependent_count
                ),
                json!({ "reservation_count": dependent_count }),
            ));
        }

        Ok(())
    }
}
