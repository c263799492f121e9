use super::*;

/// Tests renaming a monster.
///
/// Expected: Ok with the new name stored
#[tokio::test]
async fn renames_monster() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    let entity = factory::create_monster(db, &trainer).await?;

    let repo = MonsterRepository::new(db);
    repo.rename(entity.id, "Volt".to_string()).await?;

    let stored = repo.get_by_id(entity.id).await?.unwrap();
    assert_eq!(stored.name(), "Volt");

    Ok(())
}
