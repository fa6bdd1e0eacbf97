use super::*;

/// Tests creating a student reservation with a concrete range.
///
/// Verifies that the row starts out pending with the application instant
/// stamped and the display-name snapshots stored as given.
///
/// Expected: Ok with a pending reservation
#[tokio::test]
async fn creates_student_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::create_student(db).await?;
    let equipment = factory::equipment::create_equipment(db).await?;

    let repo = ReservationRepository::new(db);
    let reservation = repo
        .create(
            equipment.id,
            Some(student.id),
            None,
            Some(at(1, 10, 0)),
            Some(at(1, 11, 0)),
            Some(Decimal::new(2500, 2)),
            Some("Cell culture run".to_string()),
            student.name.clone(),
            equipment.name.clone(),
        )
        .await?;

    assert_eq!(reservation.equipment_id, equipment.id);
    assert_eq!(reservation.student_id, Some(student.id));
    assert!(reservation.teacher_id.is_none());
    assert_eq!(reservation.status, ReservationStatus::Pending);
    assert_eq!(reservation.start_at, Some(at(1, 10, 0)));
    assert_eq!(reservation.end_at, Some(at(1, 11, 0)));
    assert_eq!(reservation.price, Some(Decimal::new(2500, 2)));
    assert_eq!(reservation.snapshot.requester_name, student.name);
    assert_eq!(reservation.snapshot.equipment_name, equipment.name);
    assert!(reservation.approver_id.is_none());
    assert!(reservation.approved_at.is_none());

    // Verify reservation exists in database
    let db_reservation = entity::prelude::Reservation::find_by_id(reservation.id)
        .one(db)
        .await?;
    assert!(db_reservation.is_some());

    Ok(())
}

/// Tests creating a teacher reservation.
///
/// Expected: Ok with the teacher column set and the student column null
#[tokio::test]
async fn creates_teacher_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::teacher::create_teacher(db).await?;
    let equipment = factory::equipment::create_equipment(db).await?;

    let repo = ReservationRepository::new(db);
    let reservation = repo
        .create(
            equipment.id,
            None,
            Some(teacher.id),
            Some(at(1, 14, 0)),
            Some(at(1, 16, 0)),
            None,
            None,
            teacher.name.clone(),
            equipment.name.clone(),
        )
        .await?;

    assert_eq!(reservation.teacher_id, Some(teacher.id));
    assert!(reservation.student_id.is_none());
    assert_eq!(reservation.status, ReservationStatus::Pending);

    Ok(())
}

/// Tests creating a walk-up reservation without a time range.
///
/// Expected: Ok with both instants null
#[tokio::test]
async fn creates_walk_up_without_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::create_student(db).await?;
    let equipment = factory::equipment::create_equipment(db).await?;

    let repo = ReservationRepository::new(db);
    let reservation = repo
        .create(
            equipment.id,
            Some(student.id),
            None,
            None,
            None,
            None,
            None,
            student.name.clone(),
            equipment.name.clone(),
        )
        .await?;

    assert!(reservation.start_at.is_none());
    assert!(reservation.end_at.is_none());
    assert_eq!(reservation.status, ReservationStatus::Pending);

    Ok(())
}
