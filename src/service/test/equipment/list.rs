use super::*;

/// Tests listing equipment with a status filter and pagination.
///
/// Expected: only maintenance equipment, with the exact match total
#[tokio::test]
async fn lists_by_status_with_total() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_equipment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = NoopCache;

    for _ in 0..3 {
        factory::equipment::EquipmentFactory::new(db)
            .status(EquipmentStatus::Maintenance)
            .build()
            .await?;
    }
    factory::equipment::create_equipment(db).await?;

    let service = EquipmentService::new(db, &cache);
    let (page, total) = service
        .list(EquipmentFilter {
            status: Some(EquipmentStatus::Maintenance),
            per_page: 2,
            ..Default::default()
        })
        .await?;

    assert_eq!(page.len(), 2);
    assert_eq!(total, 3);
    assert!(page
        .iter()
        .all(|equipment| equipment.status == EquipmentStatus::Maintenance));

    Ok(())
}
