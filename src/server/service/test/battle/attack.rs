use super::*;

/// Tests that an attack is answered by the wild group and the turn comes back.
///
/// Expected: Ok with messages, and either the battle over or Ash up again on turn 2
#[tokio::test]
async fn attack_passes_turn_around() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_battle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, battle_id) = wild_battle(db, 1).await?;

    let service = BattleService::new(db);
    let result = service.attack(battle_id, attack("tackle")).await?;

    assert!(!result.messages.is_empty());
    let state = result.state;
    if state.battle.status == BattleStatus::Active {
        assert_eq!(
            state.current_participant().map(|p| p.trainer_name.as_str()),
            Some("Ash")
        );
        assert!(state.battle.current_turn > 1);
    }

    Ok(())
}

/// Tests that a move the monster doesn't know is refused.
///
/// Expected: Err(UnknownMove)
#[tokio::test]
async fn rejects_unknown_move() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_battle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, battle_id) = wild_battle(db, 1).await?;

    let service = BattleService::new(db);
    let result = service.attack(battle_id, attack("Hyper Beam")).await;

    assert!(matches!(
        result,
        Err(AppError::GameErr(GameError::UnknownMove(_)))
    ));

    Ok(())
}

/// Tests that a player outside the battle can't attack.
///
/// Expected: Err(NotParticipating)
#[tokio::test]
async fn rejects_outsider() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_battle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, battle_id) = wild_battle(db, 1).await?;

    let mut param = attack("Tackle");
    param.player_user_id = "player-2".to_string();

    let service = BattleService::new(db);
    let result = service.attack(battle_id, param).await;

    assert!(matches!(
        result,
        Err(AppError::GameErr(GameError::NotParticipating))
    ));

    Ok(())
}

/// Tests that the challenged player must wait for the challenger.
///
/// Expected: Err(Rule)
#[tokio::test]
async fn enforces_turn_order() -> Result<(), AppError> {
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

    let mut param = attack("Tackle");
    param.player_user_id = "player-2".to_string();
    let result = service.attack(started.state.battle.id, param).await;

    assert!(matches!(result, Err(AppError::GameErr(GameError::Rule(_)))));

    Ok(())
}
