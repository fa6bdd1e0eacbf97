use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::reservation::{Reservation, ReservationFilter, ReservationStatus, Role};

/// Repository for reservation records.
///
/// Generic over the connection because the conflict check and the insert that
/// follows it must run inside one transaction.
pub struct ReservationRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new pending reservation
    ///
    /// Exactly one of `student_id` and `teacher_id` must be set; a database
    /// check constraint rejects every other combination. The display-name
    /// snapshots are stored as given and never updated afterwards.
    ///
    /// # Arguments
    /// - `equipment_id`: Equipment being reserved
    /// - `student_id`: Requesting student, if the requester is a student
    /// - `teacher_id`: Requesting teacher, if the requester is a teacher
    /// - `start_at`: Requested range start, `None` for a walk-up request
    /// - `end_at`: Requested range end, `None` for a walk-up request
    /// - `price`: Optional quoted price
    /// - `description`: Optional free-text description
    /// - `requester_name`: Requester display name at creation time
    /// - `equipment_name`: Equipment display name at creation time
    ///
    /// # Returns
    /// - `Ok(Reservation)`: The created reservation, status pending
    /// - `Err(DbErr)`: Database error
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        equipment_id: i32,
        student_id: Option<i32>,
        teacher_id: Option<i32>,
        start_at: Option<NaiveDateTime>,
        end_at: Option<NaiveDateTime>,
        price: Option<Decimal>,
        description: Option<String>,
        requester_name: String,
        equipment_name: String,
    ) -> Result<Reservation, DbErr> {
        let reservation = entity::reservation::ActiveModel {
            equipment_id: ActiveValue::Set(equipment_id),
            student_id: ActiveValue::Set(student_id),
            teacher_id: ActiveValue::Set(teacher_id),
            status: ActiveValue::Set(ReservationStatus::Pending),
            applied_at: ActiveValue::Set(Utc::now().naive_utc()),
            start_at: ActiveValue::Set(start_at),
            end_at: ActiveValue::Set(end_at),
            price: ActiveValue::Set(price),
            description: ActiveValue::Set(description),
            requester_name: ActiveValue::Set(requester_name),
            equipment_name: ActiveValue::Set(equipment_name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Reservation::from_entity(reservation))
    }

    /// Gets a reservation by ID
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))`: The reservation
    /// - `Ok(None)`: Reservation not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Reservation>, DbErr> {
        let reservation = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(reservation.map(Reservation::from_entity))
    }

    /// Gets a filtered, paginated page of reservations, newest application first
    ///
    /// A student or teacher requester restricts the page to their own
    /// reservations; an admin requester sees every requester's rows.
    ///
    /// # Arguments
    /// - `filter`: Filter and pagination parameters
    ///
    /// # Returns
    /// - `Ok((reservations, total))`: Page of reservations and total number of matching records
    /// - `Err(DbErr)`: Database error
    pub async fn get_filtered(
        &self,
        filter: ReservationFilter,
    ) -> Result<(Vec<Reservation>, u64), DbErr> {
        let mut query = entity::prelude::Reservation::find();

        if let Some(requester) = filter.requester {
            match requester.role {
                Role::Student => {
                    query = query
                        .filter(entity::reservation::Column::StudentId.eq(requester.user_id));
                }
                Role::Teacher => {
                    query = query
                        .filter(entity::reservation::Column::TeacherId.eq(requester.user_id));
                }
                Role::Admin => {}
            }
        }
        if let Some(equipment_id) = filter.equipment_id {
            query = query.filter(entity::reservation::Column::EquipmentId.eq(equipment_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::reservation::Column::Status.eq(status));
        }

        let paginator = query
            .order_by_desc(entity::reservation::Column::AppliedAt)
            .order_by_desc(entity::reservation::Column::Id)
            .paginate(self.db, filter.per_page);
        let total = paginator.num_items().await?;
        let page = paginator.fetch_page(filter.page).await?;

        Ok((
            page.into_iter().map(Reservation::from_entity).collect(),
            total,
        ))
    }

    /// Gets the active (pending or approved) reservations of one piece of equipment
    ///
    /// Walk-up reservations carry no range and so cannot collide; rows with
    /// null bounds are excluded here.
    ///
    /// # Arguments
    /// - `equipment_id`: Equipment ID
    /// - `ending_after`: When set, only reservations ending after this instant
    /// - `exclude_id`: When set, this reservation is left out of the result
    ///
    /// # Returns
    /// - `Ok(reservations)`: Active reservations with a concrete range
    /// - `Err(DbErr)`: Database error
    pub async fn find_active_by_equipment(
        &self,
        equipment_id: i32,
        ending_after: Option<NaiveDateTime>,
        exclude_id: Option<i32>,
    ) -> Result<Vec<Reservation>, DbErr> {
        let mut query = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::EquipmentId.eq(equipment_id))
            .filter(
                entity::reservation::Column::Status
                    .is_in([ReservationStatus::Pending, ReservationStatus::Approved]),
            )
            .filter(entity::reservation::Column::StartAt.is_not_null())
            .filter(entity::reservation::Column::EndAt.is_not_null());

        if let Some(ending_after) = ending_after {
            query = query.filter(entity::reservation::Column::EndAt.gt(ending_after));
        }
        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::reservation::Column::Id.ne(exclude_id));
        }

        let reservations = query
            .order_by_asc(entity::reservation::Column::StartAt)
            .all(self.db)
            .await?;

        Ok(reservations
            .into_iter()
            .map(Reservation::from_entity)
            .collect())
    }

    /// Gets approved reservations of one piece of equipment still occupying it
    /// at or after the given instant, earliest start first
    ///
    /// # Arguments
    /// - `equipment_id`: Equipment ID
    /// - `after`: Reservations ending at or before this instant are skipped
    ///
    /// # Returns
    /// - `Ok(reservations)`: Approved reservations with a concrete range
    /// - `Err(DbErr)`: Database error
    pub async fn get_approved_ending_after(
        &self,
        equipment_id: i32,
        after: NaiveDateTime,
    ) -> Result<Vec<Reservation>, DbErr> {
        let reservations = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::EquipmentId.eq(equipment_id))
            .filter(entity::reservation::Column::Status.eq(ReservationStatus::Approved))
            .filter(entity::reservation::Column::StartAt.is_not_null())
            .filter(entity::reservation::Column::EndAt.gt(after))
            .order_by_asc(entity::reservation::Column::StartAt)
            .all(self.db)
            .await?;

        Ok(reservations
            .into_iter()
            .map(Reservation::from_entity)
            .collect())
    }

    /// Counts all reservations referencing one piece of equipment
    ///
    /// # Returns
    /// - `Ok(count)`: Number of reservations, any status
    /// - `Err(DbErr)`: Database error
    pub async fn count_by_equipment(&self, equipment_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::EquipmentId.eq(equipment_id))
            .count(self.db)
            .await
    }

    /// Moves a reservation to a new status, stamping the decision columns
    ///
    /// `approver_id`, `approved_at` and `reject_reason` are written only when
    /// provided; a cancel transition passes none of them.
    ///
    /// # Arguments
    /// - `id`: Reservation ID
    /// - `status`: New lifecycle status
    /// - `approver_id`: Admin who made the decision
    /// - `approved_at`: Instant of the decision
    /// - `reject_reason`: Reason recorded with a reject decision
    ///
    /// # Returns
    /// - `Ok(Reservation)`: The updated reservation
    /// - `Err(DbErr)`: Database error
    pub async fn update_status(
        &self,
        id: i32,
        status: ReservationStatus,
        approver_id: Option<i32>,
        approved_at: Option<NaiveDateTime>,
        reject_reason: Option<String>,
    ) -> Result<Reservation, DbErr> {
        let reservation = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Reservation {} not found",
                id
            )))?;

        let mut active_model: entity::reservation::ActiveModel = reservation.into();

        active_model.status = ActiveValue::Set(status);
        if let Some(approver_id) = approver_id {
            active_model.approver_id = ActiveValue::Set(Some(approver_id));
        }
        if let Some(approved_at) = approved_at {
            active_model.approved_at = ActiveValue::Set(Some(approved_at));
        }
        if let Some(reject_reason) = reject_reason {
            active_model.reject_reason = ActiveValue::Set(Some(reject_reason));
        }

        let updated = active_model.update(self.db).await?;

        Ok(Reservation::from_entity(updated))
    }

    /// Deletes a reservation by ID
    ///
    /// # Returns
    /// - `Ok(())`: Reservation deleted successfully
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Reservation::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
