use super::*;

/// Tests adding levels to a trainer.
///
/// Expected: Ok with level increased by the amount added
#[tokio::test]
async fn adds_levels() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = TrainerFactory::new(db, "player-1").level(4).build().await?;

    let repo = TrainerRepository::new(db);
    let updated = repo.add_levels(trainer.id, 3).await?;

    assert_eq!(updated.level, 7);

    Ok(())
}

/// Tests adding levels to a trainer that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_trainer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TrainerRepository::new(db);
    let result = repo.add_levels(999, 1).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
