use super::*;

/// Tests overwriting an existing member's total.
///
/// Expected: Ok with the total replaced regardless of prior state
#[tokio::test]
async fn overwrites_existing_total() -> Result<(), StoreError> {
    let test = TestBuilder::new().with_member(1001, 250.0).build().unwrap();
    let store = open_points(&test.points_path);

    let repo = PointsRepository::new(&store);
    repo.set_points(1001, 42.0).await?;

    assert_eq!(repo.get_points(1001).await?, 42.0);

    Ok(())
}

/// Tests setting the total for a user with no entry.
///
/// Expected: Ok with the entry created at the given value
#[tokio::test]
async fn creates_entry_for_new_user() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().unwrap();
    let store = open_points(&test.points_path);

    let repo = PointsRepository::new(&store);
    repo.set_points(1001, 7.5).await?;

    assert_eq!(repo.get_points(1001).await?, 7.5);

    Ok(())
}
