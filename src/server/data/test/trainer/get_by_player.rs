use super::*;

/// Tests listing a player's trainers.
///
/// Verifies that only trainers of the requested player are returned, oldest
/// first.
///
/// Expected: Ok with the player's two trainers
#[tokio::test]
async fn returns_only_players_trainers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_trainer(db, "player-1").await?;
    let second = factory::create_trainer(db, "player-1").await?;
    factory::create_trainer(db, "player-2").await?;

    let repo = TrainerRepository::new(db);
    let trainers = repo.get_by_player("player-1").await?;

    assert_eq!(trainers.len(), 2);
    assert_eq!(trainers[0].id, first.id);
    assert_eq!(trainers[1].id, second.id);

    Ok(())
}

/// Tests listing trainers for a player with none.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_unknown_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TrainerRepository::new(db);
    let trainers = repo.get_by_player("nobody").await?;

    assert!(trainers.is_empty());

    Ok(())
}
