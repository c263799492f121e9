use super::*;

/// Tests adding an item the trainer does not hold yet.
///
/// Expected: Ok with a new stack of the added quantity
#[tokio::test]
async fn creates_new_stack() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;

    let repo = InventoryRepository::new(db);
    let item = repo
        .add(InventoryChange::new(trainer.id, "balls", "Poke Ball", 5))
        .await?;

    assert_eq!(item.item_name, "Poke Ball");
    assert_eq!(item.quantity, 5);
    assert_eq!(repo.get_all(trainer.id).await?.len(), 1);

    Ok(())
}

/// Tests adding to an existing stack.
///
/// Verifies that quantities are summed instead of a second row being created.
///
/// Expected: Ok with one stack holding the combined quantity
#[tokio::test]
async fn adds_to_existing_stack() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    factory::give_item(db, trainer.id, "balls", "Poke Ball", 2).await?;

    let repo = InventoryRepository::new(db);
    let item = repo
        .add(InventoryChange::new(trainer.id, "balls", "Poke Ball", 3))
        .await?;

    assert_eq!(item.quantity, 5);
    assert_eq!(repo.get_all(trainer.id).await?.len(), 1);

    Ok(())
}

/// Tests that adding an item under a different case stacks onto the existing row.
///
/// Expected: Ok with one "Poke Ball" stack of 5
#[tokio::test]
async fn stacks_regardless_of_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    factory::give_item(db, trainer.id, "balls", "Poke Ball", 3).await?;

    let repo = InventoryRepository::new(db);
    let item = repo
        .add(InventoryChange::new(trainer.id, "balls", "poke ball", 2))
        .await?;

    assert_eq!(item.item_name, "Poke Ball");
    assert_eq!(item.quantity, 5);
    assert_eq!(repo.get_all(trainer.id).await?.len(), 1);

    Ok(())
}
