use super::*;

/// Tests that leveling up raises the level and reports the change.
///
/// Expected: Ok with old and new level and a saved monster
#[tokio::test]
async fn raises_level() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    let monster = MonsterFactory::new(db, &trainer).level(10).build().await?;

    let service = MonsterService::new(db);
    let result = service.add_levels(monster.id, 5).await?;

    assert_eq!(result.old_level, 10);
    assert_eq!(result.new_level, 15);
    assert_eq!(service.get(monster.id).await?.level(), 15);

    Ok(())
}

/// Tests that levels stop at the level cap.
///
/// Expected: Ok with the monster at level 100
#[tokio::test]
async fn stops_at_level_cap() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    let monster = MonsterFactory::new(db, &trainer).level(98).build().await?;

    let service = MonsterService::new(db);
    let result = service.add_levels(monster.id, 10).await?;

    assert_eq!(result.new_level, 100);

    Ok(())
}

/// Tests that zero levels are rejected.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_zero_levels() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    let monster = factory::create_monster(db, &trainer).await?;

    let service = MonsterService::new(db);
    let result = service.add_levels(monster.id, 0).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
