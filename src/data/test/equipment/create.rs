use super::*;

/// Tests creating a laboratory-owned piece of equipment.
///
/// Verifies that the repository stores every provided field and leaves the
/// derived next-available instant unset.
///
/// Expected: Ok with equipment created
#[tokio::test]
async fn creates_equipment_with_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_equipment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lab = factory::laboratory::create_laboratory(db).await?;

    let repo = EquipmentRepository::new(db);
    let equipment = repo
        .create(CreateEquipmentParams {
            name: "Confocal Microscope".to_string(),
            model: Some("LSM 980".to_string()),
            lab_id: Some(lab.id),
            category: EquipmentCategory::Laboratory,
            status: EquipmentStatus::Available,
            description: Some("Inverted confocal for live-cell imaging".to_string()),
        })
        .await?;

    assert_eq!(equipment.name, "Confocal Microscope");
    assert_eq!(equipment.model, Some("LSM 980".to_string()));
    assert_eq!(equipment.lab_id, Some(lab.id));
    assert_eq!(equipment.category, EquipmentCategory::Laboratory);
    assert_eq!(equipment.status, EquipmentStatus::Available);
    assert!(equipment.next_available_at.is_none());

    // Verify equipment exists in database
    let db_equipment = entity::prelude::Equipment::find_by_id(equipment.id)
        .one(db)
        .await?;
    assert!(db_equipment.is_some());
    assert_eq!(db_equipment.unwrap().name, "Confocal Microscope");

    Ok(())
}

/// Tests creating institution-wide equipment without a laboratory.
///
/// Verifies that a null laboratory reference is accepted and the
/// institution category is stored as given.
///
/// Expected: Ok with equipment created and no lab reference
#[tokio::test]
async fn creates_institution_equipment_without_lab() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_equipment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EquipmentRepository::new(db);
    let equipment = repo
        .create(CreateEquipmentParams {
            name: "Lecture Hall Projector".to_string(),
            model: None,
            lab_id: None,
            category: EquipmentCategory::Institution,
            status: EquipmentStatus::Available,
            description: None,
        })
        .await?;

    assert!(equipment.lab_id.is_none());
    assert_eq!(equipment.category, EquipmentCategory::Institution);
    assert!(equipment.model.is_none());
    assert!(equipment.description.is_none());

    Ok(())
}
