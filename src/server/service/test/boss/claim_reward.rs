use super::*;

/// Tests that a top reward becomes a level 10 monster for the trainer.
///
/// Expected: Ok with the claim marked and the monster owned by the trainer
#[tokio::test]
async fn claims_top_reward() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_submission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    let boss = factory::create_boss(db, "Mewtwo", 10).await?;

    let service = BossService::new(db);
    service.add_damage("player-1", 10, None).await?;
    let result = service
        .claim_reward(boss.id, "player-1", "Trophy", trainer.id)
        .await?;

    assert!(result.claim.is_claimed);
    assert_eq!(result.claim.monster_name.as_deref(), Some("Trophy"));
    assert_eq!(result.claim.assigned_trainer_id, Some(trainer.id));
    assert_eq!(result.monster.trainer_id, trainer.id);
    assert_eq!(result.monster.level(), 10);

    Ok(())
}

/// Tests that a reward can only be claimed once.
///
/// Expected: Err(AlreadyClaimed)
#[tokio::test]
async fn rejects_second_claim() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_submission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    let boss = factory::create_boss(db, "Mewtwo", 10).await?;

    let service = BossService::new(db);
    service.add_damage("player-1", 10, None).await?;
    service
        .claim_reward(boss.id, "player-1", "Trophy", trainer.id)
        .await?;
    let result = service
        .claim_reward(boss.id, "player-1", "Trophy Two", trainer.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::GameErr(GameError::AlreadyClaimed))
    ));

    Ok(())
}

/// Tests that a player who never hit the boss has nothing to claim.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_player_without_reward() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_submission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-2").await?;
    let boss = factory::create_boss(db, "Mewtwo", 10).await?;

    let service = BossService::new(db);
    service.add_damage("player-1", 10, None).await?;
    let result = service
        .claim_reward(boss.id, "player-2", "Trophy", trainer.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
