use super::*;

/// Tests that the same seed rolls the same monsters.
///
/// Expected: Ok with identical results and the seed echoed back
#[tokio::test]
async fn same_seed_same_monsters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_species(db, "Pikachu", &["Electric"]).await?;
    factory::create_species(db, "Bulbasaur", &["Grass", "Poison"]).await?;
    factory::create_species(db, "Squirtle", &["Water"]).await?;

    let service = RollerService::new(db);
    let first = service
        .roll(
            RollParams::default(),
            UserSettings::default(),
            5,
            Some("fixed-seed".to_string()),
        )
        .await?;
    let second = service
        .roll(
            RollParams::default(),
            UserSettings::default(),
            5,
            Some("fixed-seed".to_string()),
        )
        .await?;

    assert_eq!(first.seed, "fixed-seed");
    assert_eq!(first.monsters.len(), 5);
    assert_eq!(first.monsters, second.monsters);

    Ok(())
}

/// Tests that a roll without a seed generates one.
///
/// Expected: Ok with a non-empty seed
#[tokio::test]
async fn generates_seed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_species(db, "Pikachu", &["Electric"]).await?;

    let service = RollerService::new(db);
    let result = service
        .roll(RollParams::default(), UserSettings::default(), 1, None)
        .await?;

    assert!(!result.seed.is_empty());

    Ok(())
}

/// Tests that excluded species are never rolled.
///
/// Expected: Ok with Pikachu missing from every species1
#[tokio::test]
async fn honors_excluded_species() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_species(db, "Pikachu", &["Electric"]).await?;
    factory::create_species(db, "Squirtle", &["Water"]).await?;

    let params = RollParams {
        exclude_species: vec!["Pikachu".to_string()],
        species_max: Some(1),
        ..Default::default()
    };

    let service = RollerService::new(db);
    let result = service
        .roll(params, UserSettings::default(), 10, Some("exclude".to_string()))
        .await?;

    assert!(!result.monsters.is_empty());
    assert!(result.monsters.iter().all(|m| m.species[0] == "Squirtle"));

    Ok(())
}

/// Tests that a count above the maximum is rejected.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_large_count() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RollerService::new(db);
    let result = service
        .roll(RollParams::default(), UserSettings::default(), 51, None)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
