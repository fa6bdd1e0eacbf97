//! Pre-insert checks for timed reservation requests.
//!
//! Both checks are generic over the connection so the caller can run them
//! on the same transaction as the insert that follows; the check-then-act
//! race closes under the store's isolation instead of application luck.

use chrono::NaiveDateTime;
use sea_orm::ConnectionTrait;
use serde_json::json;

use crate::data::reservation::ReservationRepository;
use crate::data::time_window::TimeWindowRepository;
use crate::error::AppError;
use crate::model::reservation::status_name;
use crate::util::time::ranges_overlap;

/// Checks that a requested range lies inside one active availability window
/// of the equipment.
///
/// The range must not cross midnight, and must satisfy
/// `window.start <= start < window.end` and `end <= window.end` for some
/// active window. Ending exactly at a window's end is accepted.
///
/// # Arguments
/// - `db` - Connection or transaction to read windows from
/// - `equipment_id` - The equipment ID
/// - `start_at` - Requested range start
/// - `end_at` - Requested range end (exclusive)
///
/// # Returns
/// - `Ok(())` - The range fits an active window
/// - `Err(AppError::Invalid)` - No active windows, range crosses midnight,
///   or no window contains the range; a window miss carries the active
///   windows in the detail payload
pub async fn check_window_availability<C: ConnectionTrait>(
    db: &C,
    equipment_id: i32,
    start_at: NaiveDateTime,
    end_at: NaiveDateTime,
) -> Result<(), AppError> {
    let windows = TimeWindowRepository::new(db)
        .get_by_equipment(equipment_id, true)
        .await?;

    if windows.is_empty() {
        return Err(AppError::invalid(format!(
            "equipment {} has no active availability windows",
            equipment_id
        )));
    }
    if start_at.date() != end_at.date() {
        return Err(AppError::invalid(
            "start_time and end_time must fall on the same day",
        ));
    }

    let start = start_at.time();
    let end = end_at.time();
    let fits = windows
        .iter()
        .any(|window| window.start_of_day <= start && start < window.end_of_day && end <= window.end_of_day);

    if !fits {
        let active_windows: Vec<_> = windows
            .iter()
            .map(|window| {
                json!({
                    "id": window.id,
                    "start_of_day": window.start_of_day.format("%H:%M:%S").to_string(),
                    "end_of_day": window.end_of_day.format("%H:%M:%S").to_string(),
                })
            })
            .collect();
        return Err(AppError::invalid_with(
            "requested range is not within an available window",
            json!({ "active_windows": active_windows }),
        ));
    }

    Ok(())
}

/// Checks the requested range against every pending or approved reservation
/// of the equipment.
///
/// Overlap is strict half-open: ranges that merely touch do not collide.
/// Rejected and cancelled reservations never block, and walk-up requests
/// without a range have nothing to collide with.
///
/// # Arguments
/// - `db` - Connection or transaction to read reservations from
/// - `equipment_id` - The equipment ID
/// - `start_at` - Requested range start
/// - `end_at` - Requested range end (exclusive)
/// - `exclude_reservation_id` - Reservation to leave out of the scan, for
///   checks on behalf of an existing record
///
/// # Returns
/// - `Ok(())` - No collision
/// - `Err(AppError::Conflict)` - The detail payload lists every colliding
///   reservation with its range and status
pub async fn check_reservation_conflict<C: ConnectionTrait>(
    db: &C,
    equipment_id: i32,
    start_at: NaiveDateTime,
    end_at: NaiveDateTime,
    exclude_reservation_id: Option<i32>,
) -> Result<(), AppError> {
    let active = ReservationRepository::new(db)
        .find_active_by_equipment(equipment_id, None, exclude_reservation_id)
        .await?;

    let colliding: Vec<_> = active
        .iter()
        .filter(|reservation| {
            matches!(
                (reservation.start_at, reservation.end_at),
                (Some(start), Some(end)) if ranges_overlap(start_at, end_at, start, end)
            )
        })
        .collect();

    if !colliding.is_empty() {
        let reservations: Vec<_> = colliding
            .iter()
            .map(|reservation| {
                json!({
                    "id": reservation.id,
                    "start_at": reservation
                        .start_at
                        .map(|at| at.format("%Y-%m-%dT%H:%M:%S").to_string()),
                    "end_at": reservation
                        .end_at
                        .map(|at| at.format("%Y-%m-%dT%H:%M:%S").to_string()),
                    "status": status_name(reservation.status),
                })
            })
            .collect();
        return Err(AppError::conflict(
            "requested range overlaps existing reservations",
            json!({ "reservations": reservations }),
        ));
    }

    Ok(())
}
