use crate::data::time_window::TimeWindowRepository;
use chrono::NaiveTime;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_by_equipment;
mod get_by_id;

fn hms(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}
