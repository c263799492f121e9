use super::*;

/// Tests finding a trainer's monster by name regardless of case.
///
/// Expected: Ok with the matching monster
#[tokio::test]
async fn matches_name_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    let monster = MonsterFactory::new(db, &trainer).name("Sparky").build().await?;

    let repo = MonsterRepository::new(db);
    let found = repo.find_by_name_for_trainer(trainer.id, "sparky").await?;

    assert_eq!(found.map(|m| m.id), Some(monster.id));

    Ok(())
}

/// Tests that monsters of another trainer are not matched.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_other_trainers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    let other = factory::create_trainer(db, "player-2").await?;
    MonsterFactory::new(db, &other).name("Sparky").build().await?;

    let repo = MonsterRepository::new(db);
    let found = repo.find_by_name_for_trainer(trainer.id, "Sparky").await?;

    assert!(found.is_none());

    Ok(())
}
