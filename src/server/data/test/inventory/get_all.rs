use super::*;

/// Tests listing a trainer's inventory.
///
/// Verifies that stacks are ordered by category then item name and that other
/// trainers' items are excluded.
///
/// Expected: Ok with the trainer's stacks in order
#[tokio::test]
async fn orders_by_category_then_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    let other = factory::create_trainer(db, "player-2").await?;
    factory::give_item(db, trainer.id, "items", "Potion", 1).await?;
    factory::give_item(db, trainer.id, "balls", "Ultra Ball", 1).await?;
    factory::give_item(db, trainer.id, "balls", "Great Ball", 1).await?;
    factory::give_item(db, other.id, "balls", "Poke Ball", 1).await?;

    let repo = InventoryRepository::new(db);
    let items = repo.get_all(trainer.id).await?;

    let names: Vec<&str> = items.iter().map(|i| i.item_name.as_str()).collect();
    assert_eq!(names, vec!["Great Ball", "Ultra Ball", "Potion"]);

    Ok(())
}
