use super::*;

/// Tests that breeding consumes the Legacy Leeway and stores a litter.
///
/// Expected: Ok with 1-4 unclaimed offspring and no Legacy Leeway left
#[tokio::test]
async fn breeds_litter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (trainer, mother, father) = breeding_pair(db).await?;

    let service = BreedingService::new(db);
    let session = service.breed(param(trainer.id, mother, father)).await?;

    assert!((1..=4).contains(&session.offspring.len()));
    assert!(session.claimed.is_empty());
    assert!(!TrainerService::new(db)
        .has_item(trainer.id, "items", "Legacy Leeway", 1)
        .await?);

    Ok(())
}

/// Tests that breeding without a Legacy Leeway fails.
///
/// Expected: Err(MissingItem)
#[tokio::test]
async fn requires_legacy_leeway() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    let mother = MonsterFactory::new(db, &trainer).name("Mother").build().await?;
    let father = MonsterFactory::new(db, &trainer).name("Father").build().await?;

    let service = BreedingService::new(db);
    let result = service.breed(param(trainer.id, mother.id, father.id)).await;

    assert!(matches!(
        result,
        Err(AppError::GameErr(GameError::MissingItem { .. }))
    ));

    Ok(())
}

/// Tests that a monster can't breed with itself.
///
/// Expected: Err(Rule)
#[tokio::test]
async fn rejects_same_parent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (trainer, mother, _) = breeding_pair(db).await?;

    let service = BreedingService::new(db);
    let result = service.breed(param(trainer.id, mother, mother)).await;

    assert!(matches!(result, Err(AppError::GameErr(GameError::Rule(_)))));

    Ok(())
}

/// Tests that an ineligible parent blocks breeding and keeps the items.
///
/// Expected: Err(MonsterNotEligible) with the Legacy Leeway still held
#[tokio::test]
async fn rejects_ineligible_parent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_species(db, "Charizard", &["Fire"]).await?;
    let (trainer, mother, father) = breeding_pair(db).await?;

    let service = BreedingService::new(db);
    let result = service.breed(param(trainer.id, mother, father)).await;

    assert!(matches!(
        result,
        Err(AppError::GameErr(GameError::MonsterNotEligible { .. }))
    ));
    assert!(TrainerService::new(db)
        .has_item(trainer.id, "items", "Legacy Leeway", 1)
        .await?);

    Ok(())
}

/// Tests that the first parent must belong to the breeding trainer.
///
/// Expected: Err(NotOwner)
#[tokio::test]
async fn first_parent_must_be_owned() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (trainer, mother, _) = breeding_pair(db).await?;
    let other = factory::create_trainer(db, "player-2").await?;
    let stranger = factory::create_monster(db, &other).await?;

    let service = BreedingService::new(db);
    let result = service.breed(param(trainer.id, stranger.id, mother)).await;

    assert!(matches!(result, Err(AppError::GameErr(GameError::NotOwner))));

    Ok(())
}
