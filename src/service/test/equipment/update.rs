use super::*;

/// Tests updating equipment columns through the service.
///
/// Expected: Ok with the new name and status, other columns untouched
#[tokio::test]
async fn updates_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_equipment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = NoopCache;

    let stored = factory::equipment::create_equipment(db).await?;

    let service = EquipmentService::new(db, &cache);
    let equipment = service
        .update(
            stored.id,
            UpdateEquipmentParams {
                name: Some("Recalibrated spectrometer".to_string()),
                status: Some(EquipmentStatus::Maintenance),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(equipment.name, "Recalibrated spectrometer");
    assert_eq!(equipment.status, EquipmentStatus::Maintenance);
    assert_eq!(equipment.category, stored.category);

    Ok(())
}

/// Tests updating a nonexistent id.
///
/// Expected: NotFound before any write is attempted
#[tokio::test]
async fn update_missing_equipment_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_equipment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = NoopCache;

    let service = EquipmentService::new(db, &cache);
    let err = service
        .update(
            9999,
            UpdateEquipmentParams {
                name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}
