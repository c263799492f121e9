use super::*;

/// Tests that adding an item twice stacks the quantity.
///
/// Expected: Ok with one stack of 5
#[tokio::test]
async fn stacks_added_items() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;

    let service = TrainerService::new(db);
    service
        .add_item(InventoryChange::new(trainer.id, "balls", "Poke Ball", 2))
        .await?;
    service
        .add_item(InventoryChange::new(trainer.id, "balls", "Poke Ball", 3))
        .await?;

    let inventory = service.inventory(trainer.id).await?;
    assert_eq!(inventory.len(), 1);
    assert_eq!(inventory[0].quantity, 5);

    Ok(())
}

/// Tests that removing more than the trainer holds fails.
///
/// Expected: Err(MissingItem)
#[tokio::test]
async fn remove_missing_item() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    factory::give_item(db, trainer.id, "balls", "Poke Ball", 1).await?;

    let service = TrainerService::new(db);
    let result = service
        .remove_item(InventoryChange::new(trainer.id, "balls", "Poke Ball", 2))
        .await;

    assert!(matches!(
        result,
        Err(AppError::GameErr(GameError::MissingItem { .. }))
    ));

    Ok(())
}

/// Tests that an unknown inventory category is rejected.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_unknown_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;

    let service = TrainerService::new(db);
    let result = service
        .add_item(InventoryChange::new(trainer.id, "snacks", "Cookie", 1))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
