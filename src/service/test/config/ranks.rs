use super::*;

/// Tests rank administration through the service.
///
/// Expected: upserted ranks are listed by name and removable exactly once
#[tokio::test]
async fn upsert_list_and_remove_rank() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let store = open_config(&test.config_path);

    let service = ConfigService::new(&store);
    service
        .upsert_rank(UpsertRankParam {
            name: "Sergeant".to_string(),
            role_id: 42,
            points_required: 1000.0,
            requires_roles: vec![],
        })
        .await?;

    assert_eq!(service.rank_names().await?, vec!["Sergeant".to_string()]);
    assert!(service.get_ranks().await?.contains_key("Sergeant"));

    assert!(service.remove_rank("Sergeant").await?);
    assert!(!service.remove_rank("Sergeant").await?);
    assert!(service.rank_names().await?.is_empty());

    Ok(())
}
