use super::*;

/// Tests standings ordering.
///
/// Expected: rows sorted by points descending
#[tokio::test]
async fn sorted_by_points_descending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member(1001, 5.0)
        .with_member(1002, 50.0)
        .with_member(1003, 20.0)
        .build()
        .unwrap();
    let store = DocumentStore::open(&test.points_path, &PointsDocument::default())?;

    let service = LeaderboardService::new(&store);
    let rows = service.standings(&[1001, 1002, 1003]).await?;

    let order: Vec<u64> = rows.iter().map(|row| row.user_id).collect();
    assert_eq!(order, vec![1002, 1003, 1001]);

    Ok(())
}

/// Tests the member filter.
///
/// Expected: ledger entries outside the member set are excluded
#[tokio::test]
async fn excludes_non_members() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member(1001, 5.0)
        .with_member(1002, 50.0)
        .build()
        .unwrap();
    let store = DocumentStore::open(&test.points_path, &PointsDocument::default())?;

    let service = LeaderboardService::new(&store);
    let rows = service.standings(&[1001]).await?;

    assert_eq!(
        rows,
        vec![LeaderboardRow {
            user_id: 1001,
            points: 5.0
        }]
    );

    Ok(())
}

/// Tests an empty ledger.
///
/// Expected: empty standings rather than an error
#[tokio::test]
async fn empty_ledger_yields_empty_standings() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let store = DocumentStore::open(&test.points_path, &PointsDocument::default())?;

    let service = LeaderboardService::new(&store);
    assert!(service.standings(&[1001]).await?.is_empty());

    Ok(())
}
