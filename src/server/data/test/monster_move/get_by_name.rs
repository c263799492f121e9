use super::*;

/// Tests looking up a move regardless of case.
///
/// Expected: Ok with the stored move
#[tokio::test]
async fn matches_name_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_move(db, "Thunderbolt", "Electric", "Special", Some(90)).await?;

    let repo = MoveRepository::new(db);
    let found = repo.get_by_name("thunderBOLT").await?;

    assert_eq!(found.map(|m| m.name), Some("Thunderbolt".to_string()));
    assert!(repo.get_by_name("Surf").await?.is_none());

    Ok(())
}
