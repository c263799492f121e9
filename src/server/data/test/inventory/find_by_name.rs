use super::*;

/// Tests finding an item without knowing its category.
///
/// Expected: Ok with the stack from whichever category holds it
#[tokio::test]
async fn finds_item_in_any_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    factory::give_item(db, trainer.id, "berries", "Oran Berry", 4).await?;

    let repo = InventoryRepository::new(db);
    let item = repo.find_by_name(trainer.id, "Oran Berry").await?.unwrap();

    assert_eq!(item.category, "berries");
    assert_eq!(item.quantity, 4);
    assert!(repo.find_by_name(trainer.id, "Potion").await?.is_none());

    Ok(())
}

/// Tests that the item name matches regardless of case and padding.
///
/// Expected: Ok with the "Potion" stack for " potion" and "POTION"
#[tokio::test]
async fn ignores_item_name_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    factory::give_item(db, trainer.id, "items", "Potion", 2).await?;

    let repo = InventoryRepository::new(db);
    let lower = repo.find_by_name(trainer.id, " potion").await?.unwrap();
    let upper = repo.find_by_name(trainer.id, "POTION").await?.unwrap();

    assert_eq!(lower.item_name, "Potion");
    assert_eq!(upper, lower);

    Ok(())
}
