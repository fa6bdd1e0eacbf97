use super::*;

/// Tests approving a pending reservation.
///
/// Expected: approver and decision instant stamped, equipment marked in
/// use, and the next-available instant recomputed
#[tokio::test]
async fn approve_stamps_and_marks_equipment_in_use() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = NoopCache;

    let (_student, equipment, pending) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let service = ReservationService::new(db, &cache);
    let approved = service
        .update_status(pending.id, ReservationStatus::Approved, Some(42), None)
        .await?;

    assert_eq!(approved.status, ReservationStatus::Approved);
    assert_eq!(approved.approver_id, Some(42));
    assert!(approved.approved_at.is_some());
    assert!(approved.reject_reason.is_none());

    let stored_equipment = entity::prelude::Equipment::find_by_id(equipment.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored_equipment.status, EquipmentStatus::InUse);
    assert!(stored_equipment.next_available_at.is_some());

    Ok(())
}

/// Tests rejecting a pending reservation with a reason.
///
/// Expected: reason and stamps stored; the equipment is untouched and no
/// availability recompute happens
#[tokio::test]
async fn reject_stores_reason_without_touching_equipment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = NoopCache;

    let (_student, equipment, pending) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let service = ReservationService::new(db, &cache);
    let rejected = service
        .update_status(
            pending.id,
            ReservationStatus::Rejected,
            Some(42),
            Some("Maintenance scheduled".to_string()),
        )
        .await?;

    assert_eq!(rejected.status, ReservationStatus::Rejected);
    assert_eq!(rejected.approver_id, Some(42));
    assert!(rejected.approved_at.is_some());
    assert_eq!(rejected.reject_reason.as_deref(), Some("Maintenance scheduled"));

    let stored_equipment = entity::prelude::Equipment::find_by_id(equipment.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored_equipment.status, EquipmentStatus::Available);
    assert!(stored_equipment.next_available_at.is_none());

    Ok(())
}

/// Tests cancelling a pending reservation.
///
/// Cancellation is not a decision: the approver stamp is dropped even when
/// one is passed. Entering cancelled still recomputes availability.
///
/// Expected: no stamps, equipment still available, next-available filled in
#[tokio::test]
async fn cancel_pending_skips_stamps() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = NoopCache;

    let (_student, equipment, pending) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let service = ReservationService::new(db, &cache);
    let cancelled = service
        .update_status(pending.id, ReservationStatus::Cancelled, Some(42), None)
        .await?;

    assert_eq!(cancelled.status, ReservationStatus::Cancelled);
    assert!(cancelled.approver_id.is_none());
    assert!(cancelled.approved_at.is_none());

    let stored_equipment = entity::prelude::Equipment::find_by_id(equipment.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored_equipment.status, EquipmentStatus::Available);
    assert!(stored_equipment.next_available_at.is_some());

    Ok(())
}

/// Tests cancelling an approved reservation.
///
/// Expected: equipment released back to available and availability
/// recomputed
#[tokio::test]
async fn cancel_approved_releases_equipment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = NoopCache;

    let (_student, equipment, pending) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let service = ReservationService::new(db, &cache);
    service
        .update_status(pending.id, ReservationStatus::Approved, Some(42), None)
        .await?;
    let cancelled = service
        .update_status(pending.id, ReservationStatus::Cancelled, None, None)
        .await?;

    assert_eq!(cancelled.status, ReservationStatus::Cancelled);

    let stored_equipment = entity::prelude::Equipment::find_by_id(equipment.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored_equipment.status, EquipmentStatus::Available);

    Ok(())
}

/// Tests that transitions outside the table are rejected without a write.
///
/// Expected: Invalid naming both states, stored status unchanged
#[tokio::test]
async fn illegal_transitions_leave_status_unchanged() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = NoopCache;

    let student = factory::student::create_student(db).await?;
    let (equipment, _window) = factory::helpers::create_equipment_with_window(db).await?;
    let rejected = factory::reservation::ReservationFactory::for_student(
        db,
        equipment.id,
        student.id,
    )
    .status(ReservationStatus::Rejected)
    .build()
    .await?;

    let service = ReservationService::new(db, &cache);

    for target in [
        ReservationStatus::Pending,
        ReservationStatus::Approved,
        ReservationStatus::Cancelled,
        ReservationStatus::Rejected,
    ] {
        let err = service
            .update_status(rejected.id, target, Some(42), None)
            .await
            .unwrap_err();
        assert!(
            matches!(
                err,
                AppError::Invalid { ref message, .. }
                    if message.contains("rejected")
            ),
            "transition out of rejected was accepted"
        );
    }

    let stored = entity::prelude::Reservation::find_by_id(rejected.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, ReservationStatus::Rejected);
    assert!(stored.approver_id.is_none());

    Ok(())
}

/// Tests updating a nonexistent reservation.
///
/// Expected: NotFound
#[tokio::test]
async fn update_missing_reservation_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = NoopCache;

    let service = ReservationService::new(db, &cache);
    let err = service
        .update_status(9999, ReservationStatus::Approved, Some(42), None)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}
