use super::*;

/// Tests that windows come back ordered by start time regardless of
/// insertion order.
///
/// Expected: Ok with windows sorted earliest start first
#[tokio::test]
async fn orders_windows_by_start() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_equipment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let equipment = factory::equipment::create_equipment(db).await?;
    factory::time_window::TimeWindowFactory::new(db, equipment.id)
        .range(hms(13, 0), hms(17, 0))
        .build()
        .await?;
    factory::time_window::TimeWindowFactory::new(db, equipment.id)
        .range(hms(9, 0), hms(12, 0))
        .build()
        .await?;
    factory::time_window::TimeWindowFactory::new(db, equipment.id)
        .range(hms(18, 0), hms(20, 0))
        .build()
        .await?;

    let repo = TimeWindowRepository::new(db);
    let windows = repo.get_by_equipment(equipment.id, false).await?;

    assert_eq!(windows.len(), 3);
    assert_eq!(windows[0].start_of_day, hms(9, 0));
    assert_eq!(windows[1].start_of_day, hms(13, 0));
    assert_eq!(windows[2].start_of_day, hms(18, 0));

    Ok(())
}

/// Tests the active-only flag.
///
/// Expected: Ok with inactive windows excluded when requested, included
/// otherwise
#[tokio::test]
async fn only_active_excludes_inactive_windows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_equipment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let equipment = factory::equipment::create_equipment(db).await?;
    factory::time_window::TimeWindowFactory::new(db, equipment.id)
        .range(hms(9, 0), hms(12, 0))
        .build()
        .await?;
    factory::time_window::TimeWindowFactory::new(db, equipment.id)
        .range(hms(13, 0), hms(17, 0))
        .active(false)
        .build()
        .await?;

    let repo = TimeWindowRepository::new(db);

    let active_only = repo.get_by_equipment(equipment.id, true).await?;
    assert_eq!(active_only.len(), 1);
    assert!(active_only[0].active);

    let all = repo.get_by_equipment(equipment.id, false).await?;
    assert_eq!(all.len(), 2);

    Ok(())
}

/// Tests that listing is scoped to the requested equipment.
///
/// Expected: Ok with other equipment's windows absent
#[tokio::test]
async fn scopes_to_equipment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_equipment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let equipment = factory::equipment::create_equipment(db).await?;
    let other = factory::equipment::create_equipment(db).await?;
    factory::time_window::create_time_window(db, equipment.id).await?;
    factory::time_window::create_time_window(db, other.id).await?;

    let repo = TimeWindowRepository::new(db);
    let windows = repo.get_by_equipment(equipment.id, false).await?;

    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].equipment_id, equipment.id);

    Ok(())
}
