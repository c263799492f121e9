use super::*;

/// Tests listing moves for a set of types.
///
/// Expected: Ok with only moves of the given types, ordered by name
#[tokio::test]
async fn filters_by_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_move(db, "Thunderbolt", "Electric", "Special", Some(90)).await?;
    factory::create_move(db, "Surf", "Water", "Special", Some(90)).await?;
    factory::create_move(db, "Spark", "Electric", "Physical", Some(65)).await?;

    let repo = MoveRepository::new(db);
    let moves = repo.get_by_types(&["Electric".to_string()]).await?;

    let names: Vec<&str> = moves.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Spark", "Thunderbolt"]);
    assert!(repo.get_by_types(&[]).await?.is_empty());

    Ok(())
}
