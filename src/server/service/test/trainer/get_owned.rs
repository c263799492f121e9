use super::*;

/// Tests that the owner gets their trainer back.
///
/// Expected: Ok with the trainer
#[tokio::test]
async fn returns_owned_trainer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;

    let service = TrainerService::new(db);
    let found = service.get_owned(trainer.id, "player-1").await?;

    assert_eq!(found.id, trainer.id);

    Ok(())
}

/// Tests that another player's trainer is refused.
///
/// Expected: Err(NotOwner)
#[tokio::test]
async fn rejects_other_player() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;

    let service = TrainerService::new(db);
    let result = service.get_owned(trainer.id, "player-2").await;

    assert!(matches!(result, Err(AppError::GameErr(GameError::NotOwner))));

    Ok(())
}

/// Tests that an unknown trainer is reported as missing.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_trainer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TrainerService::new(db);
    let result = service.get_owned(999, "player-1").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
