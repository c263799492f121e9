use super::*;

/// Tests that consuming several items takes all of them.
///
/// Expected: Ok with both stacks reduced
#[tokio::test]
async fn consumes_all_items() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    factory::give_item(db, trainer.id, "eggs", "Standard Egg", 2).await?;
    factory::give_item(db, trainer.id, "eggs", "Incubator", 2).await?;

    let service = TrainerService::new(db);
    service
        .consume(
            trainer.id,
            &[("eggs", "Standard Egg", 1), ("eggs", "Incubator", 2)],
        )
        .await?;

    assert!(service.has_item(trainer.id, "eggs", "Standard Egg", 1).await?);
    assert!(!service.has_item(trainer.id, "eggs", "Incubator", 1).await?);

    Ok(())
}

/// Tests that nothing is consumed when one item is short.
///
/// Expected: Err(MissingItem) and the first item untouched
#[tokio::test]
async fn consumes_nothing_when_short() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    factory::give_item(db, trainer.id, "eggs", "Standard Egg", 1).await?;

    let service = TrainerService::new(db);
    let result = service
        .consume(
            trainer.id,
            &[("eggs", "Standard Egg", 1), ("eggs", "Incubator", 1)],
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::GameErr(GameError::MissingItem { .. }))
    ));
    assert!(service.has_item(trainer.id, "eggs", "Standard Egg", 1).await?);

    Ok(())
}

/// Tests that a repeated item is checked against its summed quantity.
///
/// Expected: Err(MissingItem) with both stacks untouched
#[tokio::test]
async fn sums_repeated_items() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    factory::give_item(db, trainer.id, "eggs", "Incubator", 1).await?;
    factory::give_item(db, trainer.id, "berries", "Oran Berry", 1).await?;

    let service = TrainerService::new(db);
    let result = service
        .consume(
            trainer.id,
            &[
                ("berries", "Oran Berry", 1),
                ("eggs", "Incubator", 1),
                ("eggs", "incubator", 1),
            ],
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::GameErr(GameError::MissingItem { .. }))
    ));
    assert!(service.has_item(trainer.id, "eggs", "Incubator", 1).await?);
    assert!(service.has_item(trainer.id, "berries", "Oran Berry", 1).await?);

    Ok(())
}

/// Tests that a repeated item is taken in full when the trainer holds enough.
///
/// Expected: Ok with the stack emptied
#[tokio::test]
async fn consumes_repeated_items() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    factory::give_item(db, trainer.id, "eggs", "Incubator", 2).await?;

    let service = TrainerService::new(db);
    service
        .consume(
            trainer.id,
            &[("eggs", "Incubator", 1), ("eggs", "Incubator", 1)],
        )
        .await?;

    assert!(!service.has_item(trainer.id, "eggs", "Incubator", 1).await?);

    Ok(())
}
