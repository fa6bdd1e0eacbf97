use super::*;

/// Tests creating a window from minute-precision input.
///
/// Expected: Ok with times normalized to whole seconds
#[tokio::test]
async fn creates_normalized_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_equipment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = NoopCache;

    let equipment = factory::equipment::create_equipment(db).await?;

    let service = TimeWindowService::new(db, &cache);
    let window = service
        .create(CreateTimeWindowParams {
            equipment_id: equipment.id,
            start_of_day: "09:00".to_string(),
            end_of_day: "17:30".to_string(),
            active: true,
        })
        .await?;

    assert_eq!(window.start_of_day, hms(9, 0));
    assert_eq!(window.end_of_day, hms(17, 30));
    assert!(window.active);

    Ok(())
}

/// Tests that a window must start before it ends.
///
/// Expected: Invalid for reversed and zero-length ranges
#[tokio::test]
async fn rejects_unordered_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_equipment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = NoopCache;

    let equipment = factory::equipment::create_equipment(db).await?;
    let service = TimeWindowService::new(db, &cache);

    for (start, end) in [("17:00", "09:00"), ("09:00", "09:00")] {
        let err = service
            .create(CreateTimeWindowParams {
                equipment_id: equipment.id,
                start_of_day: start.to_string(),
                end_of_day: end.to_string(),
                active: true,
            })
            .await
            .unwrap_err();
        assert!(
            matches!(err, AppError::Invalid { .. }),
            "accepted {} to {}",
            start,
            end
        );
    }

    Ok(())
}

/// Tests creating a window for nonexistent equipment.
///
/// Expected: NotFound
#[tokio::test]
async fn create_for_missing_equipment_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_equipment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = NoopCache;

    let service = TimeWindowService::new(db, &cache);
    let err = service
        .create(CreateTimeWindowParams {
            equipment_id: 9999,
            start_of_day: "09:00".to_string(),
            end_of_day: "17:00".to_string(),
            active: true,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}

/// Tests that overlap is checked against deactivated windows too.
///
/// Expected: Conflict naming the dormant window in the detail payload
#[tokio::test]
async fn rejects_overlap_with_inactive_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_equipment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = NoopCache;

    let equipment = factory::equipment::create_equipment(db).await?;
    let dormant = factory::time_window::TimeWindowFactory::new(db, equipment.id)
        .range(hms(9, 0), hms(12, 0))
        .active(false)
        .build()
        .await?;

    let service = TimeWindowService::new(db, &cache);
    let err = service
        .create(CreateTimeWindowParams {
            equipment_id: equipment.id,
            start_of_day: "11:00".to_string(),
            end_of_day: "14:00".to_string(),
            active: true,
        })
        .await
        .unwrap_err();

    match err {
        AppError::Conflict { detail, .. } => {
            assert_eq!(detail["window_id"], dormant.id);
        }
        other => panic!("expected Conflict, got {:?}", other),
    }

    Ok(())
}

/// Tests that windows sharing only a boundary instant are legal.
///
/// Expected: Ok for a window starting exactly where another ends
#[tokio::test]
async fn allows_touching_windows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_equipment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = NoopCache;

    let equipment = factory::equipment::create_equipment(db).await?;
    factory::time_window::TimeWindowFactory::new(db, equipment.id)
        .range(hms(8, 0), hms(12, 0))
        .build()
        .await?;

    let service = TimeWindowService::new(db, &cache);
    let window = service
        .create(CreateTimeWindowParams {
            equipment_id: equipment.id,
            start_of_day: "12:00".to_string(),
            end_of_day: "16:00".to_string(),
            active: true,
        })
        .await?;

    assert_eq!(window.start_of_day, hms(12, 0));

    Ok(())
}

/// Tests that creating a window drops the cached window list.
///
/// Expected: the pre-seeded entry for this equipment is gone, the entry for
/// other equipment survives
#[tokio::test]
async fn creation_invalidates_window_list_cache() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_equipment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let equipment = factory::equipment::create_equipment(db).await?;
    let other = factory::equipment::create_equipment(db).await?;

    let cache = MemoryCache::new();
    let key = CacheKey::WindowList(equipment.id).to_string();
    let other_key = CacheKey::WindowList(other.id).to_string();
    cache
        .set(&key, "stale windows".to_string(), WINDOW_LIST_TTL)
        .await;
    cache
        .set(&other_key, "still fresh".to_string(), WINDOW_LIST_TTL)
        .await;

    let service = TimeWindowService::new(db, &cache);
    service
        .create(CreateTimeWindowParams {
            equipment_id: equipment.id,
            start_of_day: "09:00".to_string(),
            end_of_day: "17:00".to_string(),
            active: true,
        })
        .await?;

    assert!(cache.get(&key).await.is_none());
    assert!(cache.get(&other_key).await.is_some());

    Ok(())
}
