use super::*;

/// Tests that another player can join on the players side.
///
/// Expected: Ok with Misty acting after Ash and the wild group
#[tokio::test]
async fn joins_running_battle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_battle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, battle_id) = wild_battle(db, 1).await?;
    let misty = TrainerFactory::new(db, "player-2").name("Misty").build().await?;
    let staryu = MonsterFactory::new(db, &misty).name("Staryu").build().await?;

    let service = BattleService::new(db);
    let result = service
        .join(battle_id, "player-2", misty.id, &[staryu.id])
        .await?;

    let joined = result
        .state
        .participant_for_player("player-2")
        .cloned()
        .unwrap();
    assert_eq!(joined.side, TeamSide::Players);
    assert_eq!(joined.turn_order, 2);

    Ok(())
}

/// Tests that a player can't join the same battle twice.
///
/// Expected: Err(Rule)
#[tokio::test]
async fn rejects_second_join() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_battle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (trainer, battle_id) = wild_battle(db, 1).await?;
    let extra = MonsterFactory::new(db, &trainer).name("Bulky").build().await?;

    let service = BattleService::new(db);
    let result = service
        .join(battle_id, "player-1", trainer.id, &[extra.id])
        .await;

    assert!(matches!(result, Err(AppError::GameErr(GameError::Rule(_)))));

    Ok(())
}

/// Tests that a PvP battle puts the opponent's monsters on the other side.
///
/// Expected: Ok with a PvP battle and Gary's Eevee on the opponents side
#[tokio::test]
async fn starts_pvp() -> Result<(), AppError> {
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
    let result = service
        .start_pvp("player-1", ash.id, &[sparky], &[gary.id])
        .await?;

    assert_eq!(result.state.battle.battle_type, BattleType::Pvp);
    let opponents = result.state.monsters_on(TeamSide::Opponents);
    assert_eq!(opponents.len(), 1);
    assert_eq!(opponents[0].name, "Eevee");

    Ok(())
}

/// Tests that a trainer can't challenge itself.
///
/// Expected: Err(Rule)
#[tokio::test]
async fn rejects_self_challenge() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_battle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (ash, sparky) = ash(db).await?;

    let service = BattleService::new(db);
    let result = service
        .start_pvp("player-1", ash.id, &[sparky], &[ash.id])
        .await;

    assert!(matches!(result, Err(AppError::GameErr(GameError::Rule(_)))));

    Ok(())
}
