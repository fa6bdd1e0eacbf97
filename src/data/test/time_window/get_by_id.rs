use super::*;

/// Tests fetching an existing window by ID.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn gets_existing_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_equipment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let equipment = factory::equipment::create_equipment(db).await?;
    let created = factory::time_window::create_time_window(db, equipment.id).await?;

    let repo = TimeWindowRepository::new(db);
    let window = repo.get_by_id(created.id).await?;

    assert!(window.is_some());
    let window = window.unwrap();
    assert_eq!(window.id, created.id);
    assert_eq!(window.equipment_id, equipment.id);
    assert_eq!(window.start_of_day, created.start_of_day);

    Ok(())
}

/// Tests fetching a nonexistent window ID.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_equipment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TimeWindowRepository::new(db);
    let window = repo.get_by_id(9999).await?;

    assert!(window.is_none());

    Ok(())
}
