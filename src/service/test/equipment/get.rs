use super::*;

/// Tests fetching equipment by id through the service.
///
/// Expected: Ok with the stored equipment
#[tokio::test]
async fn gets_existing_equipment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_equipment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = NoopCache;

    let stored = factory::equipment::create_equipment(db).await?;

    let service = EquipmentService::new(db, &cache);
    let equipment = service.get(stored.id).await?;

    assert_eq!(equipment.id, stored.id);
    assert_eq!(equipment.name, stored.name);

    Ok(())
}

/// Tests fetching a nonexistent id.
///
/// Expected: NotFound naming the equipment
#[tokio::test]
async fn get_missing_equipment_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_equipment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = NoopCache;

    let service = EquipmentService::new(db, &cache);
    let err = service.get(9999).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(message) if message.contains("9999")));

    Ok(())
}
