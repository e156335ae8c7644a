use super::*;

/// Tests looking up a configured activity value.
///
/// Expected: Ok with the seeded value
#[tokio::test]
async fn returns_configured_value() -> Result<(), StoreError> {
    let test = TestBuilder::new().with_value("raid", 15.0).build().unwrap();
    let store = open_config(&test.config_path);

    let repo = ConfigRepository::new(&store);
    assert_eq!(repo.get_value("raid").await?, 15.0);

    Ok(())
}

/// Tests looking up a key that was never configured.
///
/// Expected: Ok(0) rather than an error
#[tokio::test]
async fn returns_zero_for_unknown_key() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().unwrap();
    let store = open_config(&test.config_path);

    let repo = ConfigRepository::new(&store);
    assert_eq!(repo.get_value("doesnotexist").await?, 0.0);

    Ok(())
}

/// Tests that a read does not materialize the missing key.
///
/// Expected: the key only appears once set_value is called
#[tokio::test]
async fn read_does_not_create_key() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().unwrap();
    let store = open_config(&test.config_path);

    let repo = ConfigRepository::new(&store);
    repo.get_value("doesnotexist").await?;
    assert!(!store.read().await?.values.contains_key("doesnotexist"));

    repo.set_value("doesnotexist", 2.0).await?;
    assert!(store.read().await?.values.contains_key("doesnotexist"));

    Ok(())
}
