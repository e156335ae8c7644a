use super::*;

/// Tests setting a value through the service.
///
/// Expected: Ok with the stored value echoed back
#[tokio::test]
async fn set_value_echoes_stored_value() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let store = open_config(&test.config_path);

    let service = ConfigService::new(&store);
    let stored = service.set_value("raid", 15.0).await?;

    assert_eq!(stored, 15.0);
    assert_eq!(service.get_value("raid").await?, 15.0);

    Ok(())
}

/// Tests looking up an unconfigured key through the service.
///
/// Expected: Ok(0)
#[tokio::test]
async fn unknown_key_reads_as_zero() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let store = open_config(&test.config_path);

    let service = ConfigService::new(&store);
    assert_eq!(service.get_value("doesnotexist").await?, 0.0);

    Ok(())
}
