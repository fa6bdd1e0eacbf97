//! Domain models for the reservation lifecycle.
//!
//! A reservation belongs to exactly one requester (student or teacher) and
//! one piece of equipment. Its status walks a small state machine owned by
//! the reservation service; this module provides the data shapes and the
//! requester/role vocabulary.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::error::AppError;

pub use entity::reservation::ReservationStatus;

/// The three flat roles the system knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    /// Parses a role from its wire string.
    ///
    /// # Arguments
    /// - `value` - One of `student`, `teacher`, `admin`
    ///
    /// # Returns
    /// - `Ok(Role)` - Recognized role
    /// - `Err(AppError::Invalid)` - Any other string
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "student" => Ok(Self::Student),
            "teacher" => Ok(Self::Teacher),
            "admin" => Ok(Self::Admin),
            other => Err(AppError::invalid(format!("unknown role '{}'", other))),
        }
    }
}

/// An authenticated user acting on reservations, as resolved by the
/// identity collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requester {
    /// Role of the acting user.
    pub role: Role,
    /// Identifier within that role's table.
    pub user_id: i32,
}

/// Display names captured when the reservation was created.
///
/// The snapshot is immutable: later renames of the requester or the equipment
/// never propagate here. This is a deliberate denormalization for read
/// performance, not staleness to be repaired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationSnapshot {
    /// Requester display name as of creation time.
    pub requester_name: String,
    /// Equipment display name as of creation time.
    pub equipment_name: String,
}

/// A reservation request and its lifecycle state.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    /// Unique identifier for the reservation.
    pub id: i32,
    /// Equipment being reserved.
    pub equipment_id: i32,
    /// Requesting student, if the requester is a student.
    pub student_id: Option<i32>,
    /// Requesting teacher, if the requester is a teacher.
    pub teacher_id: Option<i32>,
    /// Lifecycle status.
    pub status: ReservationStatus,
    /// Timestamp the request was submitted. Immutable.
    pub applied_at: NaiveDateTime,
    /// Administrator who approved or rejected the request.
    pub approver_id: Option<i32>,
    /// Timestamp of the approve/reject decision.
    pub approved_at: Option<NaiveDateTime>,
    /// Reserved range start; `None` for walk-up requests without a range.
    pub start_at: Option<NaiveDateTime>,
    /// Reserved range end (exclusive).
    pub end_at: Option<NaiveDateTime>,
    /// Optional quoted price.
    pub price: Option<Decimal>,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Reason recorded with a reject decision.
    pub reject_reason: Option<String>,
    /// Names captured at creation time.
    pub snapshot: CreationSnapshot,
}

impl Reservation {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Reservation` - The converted domain model
    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            id: entity.id,
            equipment_id: entity.equipment_id,
            student_id: entity.student_id,
            teacher_id: entity.teacher_id,
            status: entity.status,
            applied_at: entity.applied_at,
            approver_id: entity.approver_id,
            approved_at: entity.approved_at,
            start_at: entity.start_at,
            end_at: entity.end_at,
            price: entity.price,
            description: entity.description,
            reject_reason: entity.reject_reason,
            snapshot: CreationSnapshot {
                requester_name: entity.requester_name,
                equipment_name: entity.equipment_name,
            },
        }
    }

    /// Whether the given requester owns this reservation.
    ///
    /// Administrators never "own" a reservation; they act through the
    /// administrative operations instead.
    ///
    /// # Arguments
    /// - `requester` - The acting user
    ///
    /// # Returns
    /// - `true` - The reservation was submitted by this requester
    pub fn owned_by(&self, requester: &Requester) -> bool {
        match requester.role {
            Role::Student => self.student_id == Some(requester.user_id),
            Role::Teacher => self.teacher_id == Some(requester.user_id),
            Role::Admin => false,
        }
    }
}

/// Human-readable name for a status, used in transition error messages and
/// conflict payloads.
pub fn status_name(status: ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::Pending => "pending",
        ReservationStatus::Approved => "approved",
        ReservationStatus::Rejected => "rejected",
        ReservationStatus::Cancelled => "cancelled",
    }
}

/// Parameters for submitting a new reservation request.
///
/// Instants arrive as raw ISO-8601 strings; the service parses and validates
/// them. Either both of `start_time`/`end_time` are supplied or neither (a
/// walk-up request without a concrete range).
#[derive(Debug, Clone, Default)]
pub struct CreateReservationParams {
    /// Equipment being reserved.
    pub equipment_id: i32,
    /// Requested range start, ISO-8601.
    pub start_time: Option<String>,
    /// Requested range end, ISO-8601.
    pub end_time: Option<String>,
    /// Optional quoted price.
    pub price: Option<Decimal>,
    /// Optional free-text description.
    pub description: Option<String>,
}

/// Filter and pagination parameters for listing reservations.
#[derive(Debug, Clone)]
pub struct ReservationFilter {
    /// Restrict to one requester (own-list view).
    pub requester: Option<Requester>,
    /// Restrict to one piece of equipment.
    pub equipment_id: Option<i32>,
    /// Restrict to one lifecycle status.
    pub status: Option<ReservationStatus>,
    /// Page number (0-indexed).
    pub page: u64,
    /// Number of items per page.
    pub per_page: u64,
}

impl Default for ReservationFilter {
    fn default() -> Self {
        Self {
            requester: None,
            equipment_id: None,
            status: None,
            page: 0,
            per_page: 10,
        }
    }
}
