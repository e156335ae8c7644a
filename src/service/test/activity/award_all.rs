use super::*;

/// Tests applying a parsed batch of records.
///
/// Expected: one result per record, applied in input order
#[tokio::test]
async fn applies_records_in_order() -> Result<(), AppError> {
    let test = seeded_context();
    let (points, config) = open_stores(&test);

    let service = ActivityService::new(&points, &config);
    let records = vec![
        ActivityRecord {
            attendance: Some(AttendanceKind::Attending),
            ..ActivityRecord::new(1001, ActivityKind::Raid)
        },
        ActivityRecord::new(1001, ActivityKind::Recruitment),
    ];

    let results = service.award_all(&records).await?;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].total, 15.0);
    assert_eq!(results[1].total, 21.0);

    Ok(())
}

/// Tests a batch containing an invalid record.
///
/// Expected: the batch stops at the failure; earlier grants stay applied
#[tokio::test]
async fn stops_at_first_invalid_record() -> Result<(), AppError> {
    let test = seeded_context();
    let (points, config) = open_stores(&test);

    let service = ActivityService::new(&points, &config);
    let records = vec![
        ActivityRecord::new(1001, ActivityKind::Recruitment),
        ActivityRecord {
            quantity: 0,
            ..ActivityRecord::new(1002, ActivityKind::Recruitment)
        },
    ];

    let result = service.award_all(&records).await;
    assert!(matches!(result, Err(AppError::InvalidInput(_))));

    let ledger = crate::data::points::PointsRepository::new(&points);
    assert_eq!(ledger.get_points(1001).await?, 6.0);
    assert_eq!(ledger.get_points(1002).await?, 0.0);

    Ok(())
}
