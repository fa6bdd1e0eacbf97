//! Service for equipment registration, lookup, and removal.

use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::cache::{Cache, CacheFamily, CacheKey};
use crate::data::equipment::EquipmentRepository;
use crate::data::reservation::ReservationRepository;
use crate::error::AppError;
use crate::model::equipment::{
    CreateEquipmentParams, Equipment, EquipmentFilter, UpdateEquipmentParams,
};

/// Service for managing reservable equipment.
pub struct EquipmentService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a dyn Cache,
}

impl<'a> EquipmentService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a dyn Cache) -> Self {
        Self { db, cache }
    }

    /// Registers a new piece of equipment.
    ///
    /// `next_available_at` starts out unset; only the availability
    /// calculator ever writes it.
    ///
    /// # Arguments
    /// - `params` - Column values for the new equipment
    ///
    /// # Returns
    /// - `Ok(Equipment)` - The created equipment
    /// - `Err(AppError)` - Database error
    pub async fn create(&self, params: CreateEquipmentParams) -> Result<Equipment, AppError> {
        let equipment = EquipmentRepository::new(self.db).create(params).await?;

        self.cache
            .delete_prefix(&CacheFamily::EquipmentLists.to_string())
            .await;

        Ok(equipment)
    }

    /// Gets a piece of equipment by ID.
    ///
    /// # Arguments
    /// - `id` - The equipment ID
    ///
    /// # Returns
    /// - `Ok(Equipment)` - The equipment
    /// - `Err(AppError::NotFound)` - Equipment not found
    pub async fn get(&self, id: i32) -> Result<Equipment, AppError> {
        EquipmentRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Lists equipment matching the filter, with pagination.
    ///
    /// # Arguments
    /// - `filter` - Column filters plus page/per_page
    ///
    /// # Returns
    /// - `Ok((Vec<Equipment>, u64))` - One page of equipment and the total
    ///   match count
    /// - `Err(AppError)` - Database error
    pub async fn list(&self, filter: EquipmentFilter) -> Result<(Vec<Equipment>, u64), AppError> {
        Ok(EquipmentRepository::new(self.db).get_filtered(filter).await?)
    }

    /// Updates a piece of equipment.
    ///
    /// # Arguments
    /// - `id` - The equipment ID
    /// - `params` - Fields to update; absent fields keep their stored value
    ///
    /// # Returns
    /// - `Ok(Equipment)` - The updated equipment
    /// - `Err(AppError::NotFound)` - Equipment not found
    pub async fn update(
        &self,
        id: i32,
        params: UpdateEquipmentParams,
    ) -> Result<Equipment, AppError> {
        let repository = EquipmentRepository::new(self.db);

        repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))?;

        let equipment = repository.update(id, params).await?;

        self.cache
            .delete(&CacheKey::EquipmentDetail(id).to_string())
            .await;
        self.cache
            .delete_prefix(&CacheFamily::EquipmentLists.to_string())
            .await;

        Ok(equipment)
    }

    /// Deletes a piece of equipment and its availability windows.
    ///
    /// Deletion is refused while any reservation, in any status, still
    /// references the equipment; the historical record wins over cleanup.
    ///
    /// # Arguments
    /// - `id` - The equipment ID
    ///
    /// # Returns
    /// - `Ok(())` - Equipment deleted
    /// - `Err(AppError::NotFound)` - Equipment not found
    /// - `Err(AppError::Conflict)` - Reservations still reference the
    ///   equipment; the detail payload carries the count
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repository = EquipmentRepository::new(self.db);

        repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))?;

        let reservation_count = ReservationRepository::new(self.db)
            .count_by_equipment(id)
            .await?;
        if reservation_count > 0 {
            return Err(AppError::conflict(
                format!(
                    "equipment {} still has {} reservations",
                    id, reservation_count
                ),
                json!({ "reservation_count": reservation_count }),
            ));
        }

        repository.delete(id).await?;

        self.cache
            .delete(&CacheKey::EquipmentDetail(id).to_string())
            .await;
        self.cache
            .delete_prefix(&CacheFamily::EquipmentLists.to_string())
            .await;
        self.cache
            .delete(&CacheKey::WindowList(id).to_string())
            .await;

        Ok(())
    }
}
