//! Reservation factory for creating test reservation entities.
//!
//! Reservations carry an exactly-one-requester invariant (student or
//! teacher, never both), so the factory exposes one constructor per
//! requester kind instead of a nullable setter pair.

use crate::factory::helpers::next_id;
use chrono::{Duration, NaiveDateTime, Utc};
use entity::reservation::ReservationStatus;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// Defaults describe the common happy path: a pending reservation for
/// tomorrow 10:00-11:00, inside the default 09:00-17:00 factory window.
///
/// # Example
///
/// ```rust,ignore
/// use entity::reservation::ReservationStatus;
/// use test_utils::factory::reservation::ReservationFactory;
///
/// let reservation = ReservationFactory::for_student(&db, equipment.id, student.id)
///     .status(ReservationStatus::Approved)
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    equipment_id: i32,
    student_id: Option<i32>,
    teacher_id: Option<i32>,
    status: ReservationStatus,
    start_at: Option<NaiveDateTime>,
    end_at: Option<NaiveDateTime>,
    price: Option<Decimal>,
    description: Option<String>,
    requester_name: String,
    equipment_name: String,
}

impl<'a> ReservationFactory<'a> {
    fn new(db: &'a DatabaseConnection, equipment_id: i32) -> Self {
        let id = next_id();
        let tomorrow = Utc::now().date_naive() + Duration::days(1);
        Self {
            db,
            equipment_id,
            student_id: None,
            teacher_id: None,
            status: ReservationStatus::Pending,
            start_at: tomorrow.and_hms_opt(10, 0, 0),
            end_at: tomorrow.and_hms_opt(11, 0, 0),
            price: None,
            description: Some("Test reservation".to_string()),
            requester_name: format!("Requester {}", id),
            equipment_name: format!("Equipment {}", equipment_id),
        }
    }

    /// Creates a factory for a reservation requested by a student.
    ///
    /// Defaults:
    /// - status: `Pending`
    /// - start_at/end_at: tomorrow 10:00-11:00
    /// - price: `None`
    /// - requester_name: `"Requester {id}"` where id is auto-incremented
    /// - equipment_name: `"Equipment {equipment_id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `equipment_id` - Equipment being reserved
    /// - `student_id` - Requesting student
    ///
    /// # Returns
    /// - `ReservationFactory` - New factory instance with defaults
    pub fn for_student(db: &'a DatabaseConnection, equipment_id: i32, student_id: i32) -> Self {
        let mut factory = Self::new(db, equipment_id);
        factory.student_id = Some(student_id);
        factory
    }

    /// Creates a factory for a reservation requested by a teacher.
    ///
    /// Same defaults as `for_student`.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `equipment_id` - Equipment being reserved
    /// - `teacher_id` - Requesting teacher
    ///
    /// # Returns
    /// - `ReservationFactory` - New factory instance with defaults
    pub fn for_teacher(db: &'a DatabaseConnection, equipment_id: i32, teacher_id: i32) -> Self {
        let mut factory = Self::new(db, equipment_id);
        factory.teacher_id = Some(teacher_id);
        factory
    }

    /// Sets the reservation status.
    pub fn status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets both reserved instants. `None` values model a walk-up request
    /// submitted without a concrete time range.
    pub fn times(mut self, start_at: Option<NaiveDateTime>, end_at: Option<NaiveDateTime>) -> Self {
        self.start_at = start_at;
        self.end_at = end_at;
        self
    }

    /// Sets the quoted price.
    pub fn price(mut self, price: Option<Decimal>) -> Self {
        self.price = price;
        self
    }

    /// Sets the free-text description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the requester display-name snapshot.
    pub fn requester_name(mut self, requester_name: impl Into<String>) -> Self {
        self.requester_name = requester_name.into();
        self
    }

    /// Builds and inserts the reservation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reservation::Model)` - Created reservation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            id: ActiveValue::NotSet,
            equipment_id: ActiveValue::Set(self.equipment_id),
            student_id: ActiveValue::Set(self.student_id),
            teacher_id: ActiveValue::Set(self.teacher_id),
            status: ActiveValue::Set(self.status),
            applied_at: ActiveValue::Set(Utc::now().naive_utc()),
            approver_id: ActiveValue::Set(None),
            approved_at: ActiveValue::Set(None),
            start_at: ActiveValue::Set(self.start_at),
            end_at: ActiveValue::Set(self.end_at),
            price: ActiveValue::Set(self.price),
            description: ActiveValue::Set(self.description),
            reject_reason: ActiveValue::Set(None),
            requester_name: ActiveValue::Set(self.requester_name),
            equipment_name: ActiveValue::Set(self.equipment_name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending student reservation for tomorrow 10:00-11:00.
///
/// Shorthand for `ReservationFactory::for_student(db, equipment_id, student_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `equipment_id` - Equipment being reserved
/// - `student_id` - Requesting student
///
/// # Returns
/// - `Ok(entity::reservation::Model)` - Created reservation entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_student_reservation(
    db: &DatabaseConnection,
    equipment_id: i32,
    student_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::for_student(db, equipment_id, student_id)
        .build()
        .await
}

/// Creates a pending teacher reservation for tomorrow 10:00-11:00.
///
/// # Arguments
/// - `db` - Database connection
/// - `equipment_id` - Equipment being reserved
/// - `teacher_id` - Requesting teacher
///
/// # Returns
/// - `Ok(entity::reservation::Model)` - Created reservation entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_teacher_reservation(
    db: &DatabaseConnection,
    equipment_id: i32,
    teacher_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::for_teacher(db, equipment_id, teacher_id)
        .build()
        .await
}
