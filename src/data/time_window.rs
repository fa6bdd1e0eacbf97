use chrono::{NaiveTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::time_window::TimeWindow;

/// Repository for recurring availability windows.
pub struct TimeWindowRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TimeWindowRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new availability window
    ///
    /// Times must already be normalized to whole seconds; the service layer
    /// owns parsing and range validation.
    ///
    /// # Arguments
    /// - `equipment_id`: Equipment the window belongs to
    /// - `start_of_day`: Window start, time-of-day
    /// - `end_of_day`: Window end, time-of-day (exclusive)
    /// - `active`: Whether the window participates in availability checks
    ///
    /// # Returns
    /// - `Ok(TimeWindow)`: The created window
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        equipment_id: i32,
        start_of_day: NaiveTime,
        end_of_day: NaiveTime,
        active: bool,
    ) -> Result<TimeWindow, DbErr> {
        let window = entity::time_window::ActiveModel {
            equipment_id: ActiveValue::Set(equipment_id),
            start_of_day: ActiveValue::Set(start_of_day),
            end_of_day: ActiveValue::Set(end_of_day),
            active: ActiveValue::Set(active),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(TimeWindow::from_entity(window))
    }

    /// Gets an availability window by ID
    ///
    /// # Returns
    /// - `Ok(Some(TimeWindow))`: The window
    /// - `Ok(None)`: Window not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<TimeWindow>, DbErr> {
        let window = entity::prelude::TimeWindow::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(window.map(TimeWindow::from_entity))
    }

    /// Gets all windows of one piece of equipment, ordered by start time
    ///
    /// # Arguments
    /// - `equipment_id`: Equipment ID
    /// - `only_active`: When true, inactive windows are excluded
    ///
    /// # Returns
    /// - `Ok(windows)`: Vector of windows, earliest start first
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_equipment(
        &self,
        equipment_id: i32,
        only_active: bool,
    ) -> Result<Vec<TimeWindow>, DbErr> {
        let mut query = entity::prelude::TimeWindow::find()
            .filter(entity::time_window::Column::EquipmentId.eq(equipment_id));

        if only_active {
            query = query.filter(entity::time_window::Column::Active.eq(true));
        }

        let windows = query
            .order_by_asc(entity::time_window::Column::StartOfDay)
            .all(self.db)
            .await?;

        Ok(windows.into_iter().map(TimeWindow::from_entity).collect())
    }

    /// Updates an availability window
    ///
    /// # Arguments
    /// - `id`: Window ID
    /// - `equipment_id`: Optional new owning equipment
    /// - `start_of_day`: Optional new start time
    /// - `end_of_day`: Optional new end time
    /// - `active`: Optional new active flag
    ///
    /// # Returns
    /// - `Ok(TimeWindow)`: The updated window
    /// - `Err(DbErr)`: Database error
    pub async fn update(
        &self,
        id: i32,
        equipment_id: Option<i32>,
        start_of_day: Option<NaiveTime>,
        end_of_day: Option<NaiveTime>,
        active: Option<bool>,
    ) -> Result<TimeWindow, DbErr> {
        let window = entity::prelude::TimeWindow::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Time window {} not found",
                id
            )))?;

        let mut active_model: entity::time_window::ActiveModel = window.into();

        if let Some(equipment_id) = equipment_id {
            active_model.equipment_id = ActiveValue::Set(equipment_id);
        }
        if let Some(start_of_day) = start_of_day {
            active_model.start_of_day = ActiveValue::Set(start_of_day);
        }
        if let Some(end_of_day) = end_of_day {
            active_model.end_of_day = ActiveValue::Set(end_of_day);
        }
        if let Some(active) = active {
            active_model.active = ActiveValue::Set(active);
        }

        let updated = active_model.update(self.db).await?;

        Ok(TimeWindow::from_entity(updated))
    }

    /// Deletes an availability window by ID
    ///
    /// # Returns
    /// - `Ok(())`: Window deleted successfully
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::TimeWindow::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
