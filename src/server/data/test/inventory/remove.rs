use super::*;

/// Tests removing part of a stack.
///
/// Expected: Ok(true) with the quantity reduced
#[tokio::test]
async fn reduces_stack() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    factory::give_item(db, trainer.id, "items", "Potion", 3).await?;

    let repo = InventoryRepository::new(db);
    let removed = repo
        .remove(InventoryChange::new(trainer.id, "items", "Potion", 1))
        .await?;

    assert!(removed);
    let item = repo.get(trainer.id, "items", "Potion").await?.unwrap();
    assert_eq!(item.quantity, 2);

    Ok(())
}

/// Tests removing a whole stack.
///
/// Expected: Ok(true) and the stack row is deleted
#[tokio::test]
async fn deletes_empty_stack() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    factory::give_item(db, trainer.id, "items", "Potion", 2).await?;

    let repo = InventoryRepository::new(db);
    let removed = repo
        .remove(InventoryChange::new(trainer.id, "items", "Potion", 2))
        .await?;

    assert!(removed);
    assert!(repo.get(trainer.id, "items", "Potion").await?.is_none());

    Ok(())
}

/// Tests removing more than the trainer holds.
///
/// Expected: Ok(false) with the stack untouched
#[tokio::test]
async fn refuses_insufficient_quantity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    factory::give_item(db, trainer.id, "items", "Potion", 1).await?;

    let repo = InventoryRepository::new(db);
    let removed = repo
        .remove(InventoryChange::new(trainer.id, "items", "Potion", 2))
        .await?;

    assert!(!removed);
    let item = repo.get(trainer.id, "items", "Potion").await?.unwrap();
    assert_eq!(item.quantity, 1);

    Ok(())
}

/// Tests removing an item the trainer never had.
///
/// Expected: Ok(false)
#[tokio::test]
async fn refuses_missing_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;

    let repo = InventoryRepository::new(db);
    let removed = repo
        .remove(InventoryChange::new(trainer.id, "items", "Potion", 1))
        .await?;

    assert!(!removed);

    Ok(())
}
