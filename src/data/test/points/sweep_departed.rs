use super::*;

/// Tests purging an entry that left before the cutoff.
///
/// Expected: Ok(1) with the entry gone from the ledger
#[tokio::test]
async fn removes_entries_departed_before_cutoff() -> Result<(), StoreError> {
    let cutoff = Utc::now() - Duration::days(30);
    let test = TestBuilder::new()
        .with_departed_member(1001, 120.0, cutoff - Duration::days(1))
        .build()
        .unwrap();
    let store = open_points(&test.points_path);

    let repo = PointsRepository::new(&store);
    let removed = repo.sweep_departed(cutoff).await?;

    assert_eq!(removed, 1);
    assert!(repo.entries().await?.is_empty());

    Ok(())
}

/// Tests an entry that left after the cutoff.
///
/// Expected: Ok(0) with the entry retained
#[tokio::test]
async fn retains_entries_departed_after_cutoff() -> Result<(), StoreError> {
    let cutoff = Utc::now() - Duration::days(30);
    let test = TestBuilder::new()
        .with_departed_member(1001, 120.0, cutoff + Duration::days(1))
        .build()
        .unwrap();
    let store = open_points(&test.points_path);

    let repo = PointsRepository::new(&store);
    let removed = repo.sweep_departed(cutoff).await?;

    assert_eq!(removed, 0);
    assert!(repo.entries().await?.contains_key("1001"));

    Ok(())
}

/// Tests that members who never left are immune to the sweep.
///
/// Expected: Ok(0) with the entry retained regardless of age
#[tokio::test]
async fn never_removes_active_entries() -> Result<(), StoreError> {
    let test = TestBuilder::new().with_member(1001, 0.0).build().unwrap();
    let store = open_points(&test.points_path);

    let repo = PointsRepository::new(&store);
    let removed = repo.sweep_departed(Utc::now() + Duration::days(3650)).await?;

    assert_eq!(removed, 0);
    assert!(repo.entries().await?.contains_key("1001"));

    Ok(())
}

/// Tests sweeping a mixed ledger.
///
/// Expected: only the entries past the cutoff are removed, in one save
#[tokio::test]
async fn removes_only_eligible_entries() -> Result<(), StoreError> {
    let cutoff = Utc::now() - Duration::days(30);
    let test = TestBuilder::new()
        .with_member(1001, 50.0)
        .with_departed_member(1002, 10.0, cutoff - Duration::days(5))
        .with_departed_member(1003, 20.0, cutoff + Duration::days(5))
        .build()
        .unwrap();
    let store = open_points(&test.points_path);

    let repo = PointsRepository::new(&store);
    let removed = repo.sweep_departed(cutoff).await?;

    assert_eq!(removed, 1);
    let entries = repo.entries().await?;
    assert!(entries.contains_key("1001"));
    assert!(!entries.contains_key("1002"));
    assert!(entries.contains_key("1003"));

    Ok(())
}
