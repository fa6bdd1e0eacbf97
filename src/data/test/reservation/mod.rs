use crate::{
    data::reservation::ReservationRepository,
    model::reservation::{Requester, ReservationFilter, ReservationStatus, Role},
};
use chrono::{Duration, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;

/// Instant `days_from_now` days ahead at the given wall-clock time.
fn at(days_from_now: i64, hour: u32, minute: u32) -> NaiveDateTime {
    (Utc::now().date_naive() + Duration::days(days_from_now))
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}
