use super::*;

/// Tests that a species missing from the catalogue can breed.
///
/// Expected: Ok with eligible true
#[tokio::test]
async fn unknown_species_is_eligible() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    let monster = factory::create_monster(db, &trainer).await?;

    let service = BreedingService::new(db);
    let eligibility = service.check_eligibility(monster.id).await?;

    assert!(eligibility.eligible);

    Ok(())
}

/// Tests that a pokemon that still evolves can't breed.
///
/// Expected: Ok with eligible false and a reason
#[tokio::test]
async fn evolving_species_is_not_eligible() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_species(db, "Pikachu", &["Electric"]).await?;
    let trainer = factory::create_trainer(db, "player-1").await?;
    let monster = factory::create_monster(db, &trainer).await?;

    let service = BreedingService::new(db);
    let eligibility = service.check_eligibility(monster.id).await?;

    assert!(!eligibility.eligible);
    assert!(eligibility.reason.is_some());

    Ok(())
}
