//! Derives the next instant a piece of equipment can be reserved.

use chrono::{Duration, NaiveDateTime, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::cache::{Cache, CacheKey};
use crate::data::equipment::EquipmentRepository;
use crate::data::reservation::ReservationRepository;
use crate::data::time_window::TimeWindowRepository;
use crate::error::AppError;
use crate::util::time::ranges_overlap;

/// How many days ahead the walk looks for a free window before giving up.
const HORIZON_DAYS: i64 = 30;

/// Computes the next instant the equipment is inside an active window and
/// clear of approved reservations.
///
/// Walks (day, window) pairs in chronological order over a 30-day horizon.
/// A pair counts as occupied when any approved reservation overlaps it at
/// all, even partially; the first unoccupied pair wins. When that pair is a
/// window already underway today, the answer is `now` rather than the
/// window start. Pending requests do not occupy anything: until approval
/// they are opinions, not commitments.
///
/// # Arguments
/// - `db` - Connection to read windows and reservations from
/// - `equipment_id` - The equipment ID
///
/// # Returns
/// - `Ok(Some(NaiveDateTime))` - Next available instant
/// - `Ok(None)` - No active windows, or no free pair within the horizon
pub async fn compute_next_available<C: ConnectionTrait>(
    db: &C,
    equipment_id: i32,
) -> Result<Option<NaiveDateTime>, AppError> {
    let windows = TimeWindowRepository::new(db)
        .get_by_equipment(equipment_id, true)
        .await?;
    if windows.is_empty() {
        return Ok(None);
    }

    let now = Utc::now().naive_utc();
    let approved = ReservationRepository::new(db)
        .get_approved_ending_after(equipment_id, now)
        .await?;

    for day_offset in 0..HORIZON_DAYS {
        let day = now.date() + Duration::days(day_offset);
        for window in &windows {
            let window_start = day.and_time(window.start_of_day);
            let window_end = day.and_time(window.end_of_day);

            // Today's windows that already ended cannot be the answer.
            if day_offset == 0 && window_end <= now {
                continue;
            }

            let occupied = approved.iter().any(|reservation| {
                matches!(
                    (reservation.start_at, reservation.end_at),
                    (Some(start), Some(end)) if ranges_overlap(window_start, window_end, start, end)
                )
            });
            if !occupied {
                if day_offset == 0 && window_start < now {
                    return Ok(Some(now));
                }
                return Ok(Some(window_start));
            }
        }
    }

    Ok(None)
}

/// Recomputes `next_available_at` for the equipment, stores it, and drops
/// the equipment's cached detail entry.
///
/// Runs after the triggering transition has already committed and must
/// never undo it: every failure here, including the equipment row having
/// vanished in the meantime, is logged and swallowed.
///
/// # Arguments
/// - `db` - Database connection
/// - `cache` - Cache collaborator for the detail invalidation
/// - `equipment_id` - The equipment ID
pub async fn refresh_next_available(
    db: &DatabaseConnection,
    cache: &dyn Cache,
    equipment_id: i32,
) {
    match compute_next_available(db, equipment_id).await {
        Ok(next_available_at) => {
            if let Err(e) = EquipmentRepository::new(db)
                .set_next_available_at(equipment_id, next_available_at)
                .await
            {
                tracing::warn!(
                    "Failed to store next available instant for equipment {}: {}",
                    equipment_id,
                    e
                );
            }
        }
        Err(e) => {
            tracing::warn!(
                "Failed to compute next available instant for equipment {}: {}",
                equipment_id,
                e
            );
        }
    }

    cache
        .delete(&CacheKey::EquipmentDetail(equipment_id).to_string())
        .await;
}
