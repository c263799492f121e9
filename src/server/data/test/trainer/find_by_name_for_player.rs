use super::*;

/// Tests finding a trainer by name regardless of case.
///
/// Expected: Ok with the matching trainer
#[tokio::test]
async fn matches_name_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = TrainerFactory::new(db, "player-1").name("Misty").build().await?;

    let repo = TrainerRepository::new(db);
    let found = repo.find_by_name_for_player("player-1", " misty ").await?;

    assert_eq!(found.map(|t| t.id), Some(trainer.id));

    Ok(())
}

/// Tests that another player's trainer is not found by name.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_other_players_trainers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    TrainerFactory::new(db, "player-2").name("Misty").build().await?;

    let repo = TrainerRepository::new(db);
    let found = repo.find_by_name_for_player("player-1", "Misty").await?;

    assert!(found.is_none());

    Ok(())
}
