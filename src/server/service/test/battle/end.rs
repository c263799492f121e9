use super::*;

/// Tests that forfeiting hands the win to the other side.
///
/// Expected: Ok with the battle completed and the opponents winning
#[tokio::test]
async fn forfeit_ends_battle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_battle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, battle_id) = wild_battle(db, 1).await?;

    let service = BattleService::new(db);
    let result = service.forfeit(battle_id, "player-1").await?;

    assert_eq!(result.state.battle.status, BattleStatus::Completed);
    assert_eq!(
        result.state.battle.winner,
        Some(Winner::Side(TeamSide::Opponents))
    );

    let after = service.attack(battle_id, attack("Tackle")).await;
    assert!(matches!(
        after,
        Err(AppError::GameErr(GameError::BattleNotActive))
    ));

    Ok(())
}

/// Tests that fleeing only works in wild battles.
///
/// Expected: Err(Rule) in a PvP battle
#[tokio::test]
async fn flee_needs_wild_battle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_battle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (ash, sparky) = ash(db).await?;
    let gary = TrainerFactory::new(db, "player-2").name("Gary").build().await?;
    MonsterFactory::new(db, &gary).name("Eevee").build().await?;

    let service = BattleService::new(db);
    let started = service
        .start_pvp("player-1", ash.id, &[sparky], &[gary.id])
        .await?;
    let result = service.flee(started.state.battle.id, "player-1").await;

    assert!(matches!(result, Err(AppError::GameErr(GameError::Rule(_)))));

    Ok(())
}

/// Tests that a forced end pays the winning players coins.
///
/// Expected: Ok with a coin reward for Ash credited to the trainer
#[tokio::test]
async fn force_end_pays_winners() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_battle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (trainer, battle_id) = wild_battle(db, 1).await?;

    let service = BattleService::new(db);
    let result = service
        .force_end(battle_id, Winner::Side(TeamSide::Players), None)
        .await?;

    assert_eq!(result.state.battle.status, BattleStatus::Completed);
    assert_eq!(result.rewards.len(), 1);
    let reward = &result.rewards[0];
    assert_eq!(reward.trainer_id, trainer.id);
    assert!(reward.coins > 0);

    let ash = TrainerService::new(db).get(trainer.id).await?;
    assert_eq!(ash.currency_amount, reward.coins);

    Ok(())
}
