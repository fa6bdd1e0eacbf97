use super::*;

fn full_day() -> (NaiveTime, NaiveTime) {
    (
        NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(23, 59, 59).unwrap(),
    )
}

/// Tests that a free window already underway answers with the present.
///
/// Expected: an instant between just-before and just-after the call
#[tokio::test]
async fn returns_now_when_window_underway() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let equipment = factory::equipment::create_equipment(db).await?;
    let (start, end) = full_day();
    factory::time_window::TimeWindowFactory::new(db, equipment.id)
        .range(start, end)
        .build()
        .await?;

    let before = Utc::now().naive_utc();
    let next = compute_next_available(db, equipment.id).await?.unwrap();
    let after = Utc::now().naive_utc();

    assert!(next >= before && next <= after, "got {}", next);

    Ok(())
}

/// Tests walking past fully blocked days.
///
/// An approved reservation covers today and tomorrow end to end, so the
/// first free pair is the day-after-tomorrow window.
///
/// Expected: day+2 at the window start
#[tokio::test]
async fn skips_fully_blocked_days() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::create_student(db).await?;
    let equipment = factory::equipment::create_equipment(db).await?;
    let (start, end) = full_day();
    factory::time_window::TimeWindowFactory::new(db, equipment.id)
        .range(start, end)
        .build()
        .await?;
    factory::reservation::ReservationFactory::for_student(db, equipment.id, student.id)
        .status(ReservationStatus::Approved)
        .times(Some(at(0, 0, 0)), Some(at(2, 0, 0)))
        .build()
        .await?;

    let next = compute_next_available(db, equipment.id).await?;

    assert_eq!(next, Some(at(2, 0, 0)));

    Ok(())
}

/// Tests equipment with no active windows.
///
/// Expected: None even though a dormant window exists
#[tokio::test]
async fn returns_none_without_active_windows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let equipment = factory::equipment::create_equipment(db).await?;
    factory::time_window::TimeWindowFactory::new(db, equipment.id)
        .active(false)
        .build()
        .await?;

    let next = compute_next_available(db, equipment.id).await?;

    assert_eq!(next, None);

    Ok(())
}

/// Tests a horizon blocked end to end.
///
/// Expected: None once nothing frees up within thirty days
#[tokio::test]
async fn returns_none_when_horizon_fully_blocked() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::create_student(db).await?;
    let equipment = factory::equipment::create_equipment(db).await?;
    let (start, end) = full_day();
    factory::time_window::TimeWindowFactory::new(db, equipment.id)
        .range(start, end)
        .build()
        .await?;
    factory::reservation::ReservationFactory::for_student(db, equipment.id, student.id)
        .status(ReservationStatus::Approved)
        .times(Some(at(0, 0, 0)), Some(at(31, 0, 0)))
        .build()
        .await?;

    let next = compute_next_available(db, equipment.id).await?;

    assert_eq!(next, None);

    Ok(())
}

/// Tests that windows are walked in start order and a touching reservation
/// does not occupy the window after it.
///
/// The morning window runs 00:00 to 08:00 and the approved reservation
/// ends exactly at tomorrow 08:00, so tomorrow's later window is the first
/// free pair.
///
/// Expected: tomorrow at 08:00
#[tokio::test]
async fn walks_windows_in_day_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::create_student(db).await?;
    let equipment = factory::equipment::create_equipment(db).await?;
    factory::time_window::TimeWindowFactory::new(db, equipment.id)
        .range(
            NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        )
        .build()
        .await?;
    factory::time_window::TimeWindowFactory::new(db, equipment.id)
        .range(
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(23, 59, 59).unwrap(),
        )
        .build()
        .await?;
    factory::reservation::ReservationFactory::for_student(db, equipment.id, student.id)
        .status(ReservationStatus::Approved)
        .times(Some(at(0, 0, 0)), Some(at(1, 8, 0)))
        .build()
        .await?;

    let next = compute_next_available(db, equipment.id).await?;

    assert_eq!(next, Some(at(1, 8, 0)));

    Ok(())
}

/// Tests that the refresh writes the derived column and repeats cleanly.
///
/// Expected: the same stored value after running twice
#[tokio::test]
async fn refresh_writes_column_idempotently() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = NoopCache;

    let student = factory::student::create_student(db).await?;
    let equipment = factory::equipment::create_equipment(db).await?;
    let (start, end) = full_day();
    factory::time_window::TimeWindowFactory::new(db, equipment.id)
        .range(start, end)
        .build()
        .await?;
    factory::reservation::ReservationFactory::for_student(db, equipment.id, student.id)
        .status(ReservationStatus::Approved)
        .times(Some(at(0, 0, 0)), Some(at(2, 0, 0)))
        .build()
        .await?;

    refresh_next_available(db, &cache, equipment.id).await;
    let first = entity::prelude::Equipment::find_by_id(equipment.id)
        .one(db)
        .await?
        .unwrap()
        .next_available_at;
    assert_eq!(first, Some(at(2, 0, 0)));

    refresh_next_available(db, &cache, equipment.id).await;
    let second = entity::prelude::Equipment::find_by_id(equipment.id)
        .one(db)
        .await?
        .unwrap()
        .next_available_at;
    assert_eq!(second, first);

    Ok(())
}

/// Tests the refresh against equipment that no longer exists.
///
/// Expected: completes without surfacing an error
#[tokio::test]
async fn refresh_survives_missing_equipment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = NoopCache;

    refresh_next_available(db, &cache, 9999).await;

    Ok(())
}
