use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::equipment::{
    CreateEquipmentParams, Equipment, EquipmentFilter, EquipmentStatus, UpdateEquipmentParams,
};

/// Repository for equipment records.
///
/// Generic over the connection so callers can run operations either on the
/// shared [`sea_orm::DatabaseConnection`] or inside an open transaction.
pub struct EquipmentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EquipmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new piece of equipment
    ///
    /// # Arguments
    /// - `params`: Field values for the new equipment
    ///
    /// # Returns
    /// - `Ok(Equipment)`: The created equipment
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateEquipmentParams) -> Result<Equipment, DbErr> {
        let now = Utc::now().naive_utc();

        let equipment = entity::equipment::ActiveModel {
            name: ActiveValue::Set(params.name),
            model: ActiveValue::Set(params.model),
            lab_id: ActiveValue::Set(params.lab_id),
            category: ActiveValue::Set(params.category),
            status: ActiveValue::Set(params.status),
            description: ActiveValue::Set(params.description),
            next_available_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Equipment::from_entity(equipment))
    }

    /// Gets a piece of equipment by ID
    ///
    /// # Returns
    /// - `Ok(Some(Equipment))`: The equipment
    /// - `Ok(None)`: Equipment not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Equipment>, DbErr> {
        let equipment = entity::prelude::Equipment::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(equipment.map(Equipment::from_entity))
    }

    /// Gets a filtered, paginated page of equipment ordered by ID
    ///
    /// # Arguments
    /// - `filter`: Filter and pagination parameters
    ///
    /// # Returns
    /// - `Ok((equipment, total))`: Page of equipment and total number of matching records
    /// - `Err(DbErr)`: Database error
    pub async fn get_filtered(
        &self,
        filter: EquipmentFilter,
    ) -> Result<(Vec<Equipment>, u64), DbErr> {
        let mut query = entity::prelude::Equipment::find();

        if let Some(lab_id) = filter.lab_id {
            query = query.filter(entity::equipment::Column::LabId.eq(lab_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::equipment::Column::Status.eq(status));
        }
        if let Some(category) = filter.category {
            query = query.filter(entity::equipment::Column::Category.eq(category));
        }
        if let Some(keyword) = filter.keyword {
            query = query.filter(entity::equipment::Column::Name.contains(keyword));
        }

        let paginator = query
            .order_by_asc(entity::equipment::Column::Id)
            .paginate(self.db, filter.per_page);
        let total = paginator.num_items().await?;
        let page = paginator.fetch_page(filter.page).await?;

        Ok((page.into_iter().map(Equipment::from_entity).collect(), total))
    }

    /// Updates a piece of equipment
    ///
    /// # Arguments
    /// - `id`: Equipment ID
    /// - `params`: Optional new field values; `Some(None)` clears a nullable column
    ///
    /// # Returns
    /// - `Ok(Equipment)`: The updated equipment
    /// - `Err(DbErr)`: Database error
    pub async fn update(
        &self,
        id: i32,
        params: UpdateEquipmentParams,
    ) -> Result<Equipment, DbErr> {
        let equipment = entity::prelude::Equipment::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Equipment {} not found", id)))?;

        let mut active_model: entity::equipment::ActiveModel = equipment.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(model) = params.model {
            active_model.model = ActiveValue::Set(model);
        }
        if let Some(lab_id) = params.lab_id {
            active_model.lab_id = ActiveValue::Set(lab_id);
        }
        if let Some(category) = params.category {
            active_model.category = ActiveValue::Set(category);
        }
        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(status);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let updated = active_model.update(self.db).await?;

        Ok(Equipment::from_entity(updated))
    }

    /// Sets the operational status without touching any other column
    ///
    /// # Arguments
    /// - `id`: Equipment ID
    /// - `status`: New operational status
    ///
    /// # Returns
    /// - `Ok(())`: Status updated
    /// - `Err(DbErr)`: Database error
    pub async fn set_status(&self, id: i32, status: EquipmentStatus) -> Result<(), DbErr> {
        entity::equipment::ActiveModel {
            id: ActiveValue::Set(id),
            status: ActiveValue::Set(status),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Stores a freshly computed next-available instant
    ///
    /// # Arguments
    /// - `id`: Equipment ID
    /// - `next_available_at`: Computed instant, or `None` when no window yields one
    ///
    /// # Returns
    /// - `Ok(())`: Value stored
    /// - `Err(DbErr)`: Database error
    pub async fn set_next_available_at(
        &self,
        id: i32,
        next_available_at: Option<NaiveDateTime>,
    ) -> Result<(), DbErr> {
        entity::equipment::ActiveModel {
            id: ActiveValue::Set(id),
            next_available_at: ActiveValue::Set(next_available_at),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Deletes a piece of equipment by ID
    ///
    /// # Returns
    /// - `Ok(())`: Equipment deleted successfully
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Equipment::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
