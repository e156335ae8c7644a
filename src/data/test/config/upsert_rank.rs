use super::*;

/// Tests creating a new rank rule.
///
/// Expected: Ok with the rule present in the rank collection
#[tokio::test]
async fn creates_rank() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().unwrap();
    let store = open_config(&test.config_path);

    let repo = ConfigRepository::new(&store);
    repo.upsert_rank(UpsertRankParam {
        name: "Sergeant".to_string(),
        role_id: 42,
        points_required: 1000.0,
        requires_roles: vec![7],
    })
    .await?;

    let ranks = repo.get_ranks().await?;
    let rule = ranks.get("Sergeant").unwrap();
    assert_eq!(rule.role_id, 42);
    assert_eq!(rule.points_required, 1000.0);
    assert_eq!(rule.requires_roles, vec![7]);

    Ok(())
}

/// Tests replacing an existing rank rule.
///
/// Expected: Ok with the rule's fields fully overwritten
#[tokio::test]
async fn replaces_existing_rank() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_rank("Sergeant", 42, 1000.0, &[7])
        .build()
        .unwrap();
    let store = open_config(&test.config_path);

    let repo = ConfigRepository::new(&store);
    repo.upsert_rank(UpsertRankParam {
        name: "Sergeant".to_string(),
        role_id: 43,
        points_required: 1500.0,
        requires_roles: vec![],
    })
    .await?;

    let ranks = repo.get_ranks().await?;
    let rule = ranks.get("Sergeant").unwrap();
    assert_eq!(rule.role_id, 43);
    assert_eq!(rule.points_required, 1500.0);
    assert!(rule.requires_roles.is_empty());

    Ok(())
}
