//! Pieces shared by every factory module: unique-value generation and
//! helpers that create whole object graphs in one call.

use sea_orm::{DatabaseConnection, DbErr};

/// Process-wide counter behind `next_id()`.
///
/// Unique-constrained columns (student numbers, serial numbers) derive their
/// values from it so factories never collide, even across tests sharing a
/// database.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Returns the next value of the shared counter.
///
/// # Returns
/// - `u64` - Monotonically increasing, unique within the test process
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an equipment entity together with one active daily window.
///
/// The window spans 09:00 to 17:00, which is wide enough for most
/// reservation scenarios. Use the individual factories if the test needs a
/// different schedule shape.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((equipment, window))` - Tuple of both created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_equipment_with_window(
    db: &DatabaseConnection,
) -> Result<(entity::equipment::Model, entity::time_window::Model), DbErr> {
    let equipment = crate::factory::equipment::create_equipment(db).await?;
    let window = crate::factory::time_window::create_time_window(db, equipment.id).await?;

    Ok((equipment, window))
}

/// Creates a pending student reservation with all of its dependencies.
///
/// This is a convenience method that creates:
/// 1. Student (as requester)
/// 2. Equipment (with one active 09:00-17:00 window)
/// 3. Reservation (pending, tomorrow 10:00-11:00)
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((student, equipment, reservation))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::student::Model,
        entity::equipment::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let student = crate::factory::student::create_student(db).await?;
    let (equipment, _window) = create_equipment_with_window(db).await?;
    let reservation =
        crate::factory::reservation::create_student_reservation(db, equipment.id, student.id)
            .await?;

    Ok((student, equipment, reservation))
}
