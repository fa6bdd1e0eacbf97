//! Service for the reservation request lifecycle.
//!
//! A reservation is born `pending` and walks a four-state machine:
//! administrators approve or reject it, and the requester (or an
//! administrator) can cancel it before or after approval. Rejected and
//! cancelled are terminal. The legal moves are exactly
//! pending→approved, pending→rejected, pending→cancelled, and
//! approved→cancelled.

pub mod availability;
pub mod validate;

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::cache::{Cache, CacheFamily, CacheKey};
use crate::data::equipment::EquipmentRepository;
use crate::data::identity::IdentityRepository;
use crate::data::reservation::ReservationRepository;
use crate::error::AppError;
use crate::model::equipment::EquipmentStatus;
use crate::model::reservation::{
    status_name, CreateReservationParams, Requester, Reservation, ReservationFilter,
    ReservationStatus, Role,
};
use crate::util::time::parse_instant;

use availability::refresh_next_available;
use validate::{check_reservation_conflict, check_window_availability};

/// Whether `from` → `to` is one of the four legal lifecycle moves.
///
/// Everything else is rejected, including repeating the current status.
fn transition_allowed(from: ReservationStatus, to: ReservationStatus) -> bool {
    matches!(
        (from, to),
        (ReservationStatus::Pending, ReservationStatus::Approved)
            | (ReservationStatus::Pending, ReservationStatus::Rejected)
            | (ReservationStatus::Pending, ReservationStatus::Cancelled)
            | (ReservationStatus::Approved, ReservationStatus::Cancelled)
    )
}

/// Service for submitting reservation requests and driving their lifecycle.
pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a dyn Cache,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a dyn Cache) -> Self {
        Self { db, cache }
    }

    /// Submits a new reservation request on behalf of a student or teacher.
    ///
    /// Either both of `start_time`/`end_time` are supplied, in which case
    /// the range must parse, be ordered, not start in the past, fit an
    /// active availability window, and be clear of pending/approved
    /// reservations; or neither is, for a walk-up request that skips the
    /// range checks entirely. The conflict checks and the insert share one
    /// transaction, so two racing requests for the same range cannot both
    /// pass. The new record is always `pending`; availability is not
    /// recomputed until an approval happens.
    ///
    /// # Arguments
    /// - `requester` - The acting student or teacher
    /// - `params` - Equipment, optional ISO-8601 range, price, description
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The created pending reservation
    /// - `Err(AppError::NotFound)` - Equipment or requester row not found
    /// - `Err(AppError::Invalid)` - Admin requester, half-supplied or
    ///   malformed range, or no window fits
    /// - `Err(AppError::Conflict)` - The range collides with an existing
    ///   reservation
    pub async fn create(
        &self,
        requester: Requester,
        params: CreateReservationParams,
    ) -> Result<Reservation, AppError> {
        let equipment = EquipmentRepository::new(self.db)
            .get_by_id(params.equipment_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Equipment {} not found", params.equipment_id))
            })?;

        let role_label = match requester.role {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
            Role::Admin => {
                return Err(AppError::invalid(
                    "reservations can only be submitted by a student or a teacher",
                ))
            }
        };
        let requester_name = IdentityRepository::new(self.db)
            .resolve_name(requester)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("{} {} not found", role_label, requester.user_id))
            })?;

        let student_id = matches!(requester.role, Role::Student).then_some(requester.user_id);
        let teacher_id = matches!(requester.role, Role::Teacher).then_some(requester.user_id);

        let range = parse_range(&params)?;

        let txn = self.db.begin().await?;

        if let Some((start_at, end_at)) = range {
            check_window_availability(&txn, params.equipment_id, start_at, end_at).await?;
            check_reservation_conflict(&txn, params.equipment_id, start_at, end_at, None).await?;
        }

        let (start_at, end_at) = match range {
            Some((start_at, end_at)) => (Some(start_at), Some(end_at)),
            None => (None, None),
        };
        let reservation = ReservationRepository::new(&txn)
            .create(
                params.equipment_id,
                student_id,
                teacher_id,
                start_at,
                end_at,
                params.price,
                params.description,
                requester_name,
                equipment.name,
            )
            .await?;

        txn.commit().await?;

        self.cache
            .delete_prefix(&CacheFamily::ReservationLists.to_string())
            .await;

        Ok(reservation)
    }

    /// Moves a reservation to a new lifecycle status.
    ///
    /// Approvals and rejections stamp the deciding administrator and the
    /// decision instant; a reject reason travels with the reject itself so
    /// the record is consistent under the all-or-nothing rule. The two
    /// transitions that change what the device is doing right now also flip
    /// its status: pending→approved marks it in use, approved→cancelled
    /// marks it available again. Both writes share one transaction. After
    /// commit, entering approved or cancelled triggers an availability
    /// recompute.
    ///
    /// # Arguments
    /// - `id` - The reservation ID
    /// - `new_status` - Target lifecycle status
    /// - `approver_id` - Deciding administrator, for approve/reject
    /// - `reject_reason` - Stored only when the target status is rejected
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The updated reservation
    /// - `Err(AppError::NotFound)` - Reservation not found
    /// - `Err(AppError::Invalid)` - The transition is not in the table
    pub async fn update_status(
        &self,
        id: i32,
        new_status: ReservationStatus,
        approver_id: Option<i32>,
        reject_reason: Option<String>,
    ) -> Result<Reservation, AppError> {
        let txn = self.db.begin().await?;

        let stored = ReservationRepository::new(&txn)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reservation {} not found", id)))?;

        if !transition_allowed(stored.status, new_status) {
            return Err(AppError::invalid(format!(
                "cannot transition reservation {} from {} to {}",
                id,
                status_name(stored.status),
                status_name(new_status)
            )));
        }

        let decided = matches!(
            new_status,
            ReservationStatus::Approved | ReservationStatus::Rejected
        );
        let approved_at = decided.then(|| Utc::now().naive_utc());
        let approver = if decided { approver_id } else { None };
        let reason = if new_status == ReservationStatus::Rejected {
            reject_reason
        } else {
            None
        };

        match (stored.status, new_status) {
            (ReservationStatus::Pending, ReservationStatus::Approved) => {
                EquipmentRepository::new(&txn)
                    .set_status(stored.equipment_id, EquipmentStatus::InUse)
                    .await?;
            }
            (ReservationStatus::Approved, ReservationStatus::Cancelled) => {
                EquipmentRepository::new(&txn)
                    .set_status(stored.equipment_id, EquipmentStatus::Available)
                    .await?;
            }
            _ => {}
        }

        let reservation = ReservationRepository::new(&txn)
            .update_status(id, new_status, approver, approved_at, reason)
            .await?;

        txn.commit().await?;

        if matches!(
            new_status,
            ReservationStatus::Approved | ReservationStatus::Cancelled
        ) {
            refresh_next_available(self.db, self.cache, stored.equipment_id).await;
        }

        self.cache
            .delete(&CacheKey::EquipmentDetail(stored.equipment_id).to_string())
            .await;
        self.cache
            .delete_prefix(&CacheFamily::EquipmentLists.to_string())
            .await;
        self.cache
            .delete(&CacheKey::ReservationDetail(id).to_string())
            .await;
        self.cache
            .delete_prefix(&CacheFamily::ReservationLists.to_string())
            .await;

        Ok(reservation)
    }

    /// Cancels a reservation on behalf of the requester who submitted it.
    ///
    /// # Arguments
    /// - `id` - The reservation ID
    /// - `requester` - The acting user
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The cancelled reservation
    /// - `Err(AppError::NotFound)` - Reservation not found
    /// - `Err(AppError::Forbidden)` - The reservation belongs to someone else
    /// - `Err(AppError::Invalid)` - The reservation is already terminal
    pub async fn cancel_own(&self, id: i32, requester: Requester) -> Result<Reservation, AppError> {
        let stored = ReservationRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reservation {} not found", id)))?;

        if !stored.owned_by(&requester) {
            return Err(AppError::Forbidden(
                "only the requester who submitted a reservation may cancel it".to_string(),
            ));
        }

        self.update_status(id, ReservationStatus::Cancelled, None, None)
            .await
    }

    /// Hard-deletes a reservation record.
    ///
    /// Deleting an approved reservation frees its range, so availability is
    /// recomputed afterwards; deleting any other status leaves availability
    /// untouched.
    ///
    /// # Arguments
    /// - `id` - The reservation ID
    ///
    /// # Returns
    /// - `Ok(())` - Reservation deleted
    /// - `Err(AppError::NotFound)` - Reservation not found
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repository = ReservationRepository::new(self.db);

        let stored = repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reservation {} not found", id)))?;

        repository.delete(id).await?;

        if stored.status == ReservationStatus::Approved {
            refresh_next_available(self.db, self.cache, stored.equipment_id).await;
        }

        self.cache
            .delete(&CacheKey::ReservationDetail(id).to_string())
            .await;
        self.cache
            .delete_prefix(&CacheFamily::ReservationLists.to_string())
            .await;

        Ok(())
    }

    /// Gets a reservation by ID.
    ///
    /// # Arguments
    /// - `id` - The reservation ID
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The reservation
    /// - `Err(AppError::NotFound)` - Reservation not found
    pub async fn get(&self, id: i32) -> Result<Reservation, AppError> {
        ReservationRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reservation {} not found", id)))
    }

    /// Lists reservations matching the filter, newest first.
    ///
    /// # Arguments
    /// - `filter` - Requester/equipment/status filters plus page/per_page
    ///
    /// # Returns
    /// - `Ok((Vec<Reservation>, u64))` - One page of reservations and the
    ///   total match count
    /// - `Err(AppError)` - Database error
    pub async fn list(
        &self,
        filter: ReservationFilter,
    ) -> Result<(Vec<Reservation>, u64), AppError> {
        Ok(ReservationRepository::new(self.db)
            .get_filtered(filter)
            .await?)
    }
}

/// Parses and validates the optional reservation range.
///
/// Exactly one of the two instants being supplied is an error; a request
/// with neither is a walk-up and skips every range check.
fn parse_range(
    params: &CreateReservationParams,
) -> Result<Option<(chrono::NaiveDateTime, chrono::NaiveDateTime)>, AppError> {
    match (params.start_time.as_deref(), params.end_time.as_deref()) {
        (None, None) => Ok(None),
        (Some(start_raw), Some(end_raw)) => {
            let start_at = parse_instant("start_time", start_raw)?;
            let end_at = parse_instant("end_time", end_raw)?;
            if start_at >= end_at {
                return Err(AppError::invalid("start_time must be before end_time"));
            }
            if start_at < Utc::now().naive_utc() {
                return Err(AppError::invalid("start_time must not be in the past"));
            }
            Ok(Some((start_at, end_at)))
        }
        _ => Err(AppError::invalid(
            "start_time and end_time must be provided together",
        )),
    }
}
