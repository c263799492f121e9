use super::*;

/// Tests that a wild encounter starts a wild battle with the player first.
///
/// Expected: Ok with two participants, the player up first and one wild monster active
#[tokio::test]
async fn starts_wild_battle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_battle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (trainer, monster_id) = ash(db).await?;
    let (encounter, _) = factory::create_wild_encounter(db, 2).await?;

    let service = BattleService::new(db);
    let result = service
        .start_battle(encounter.id, "player-1", trainer.id, &[monster_id])
        .await?;
    let state = result.state;

    assert_eq!(state.battle.battle_type, BattleType::Wild);
    assert_eq!(state.battle.status, BattleStatus::Active);
    assert_eq!(state.participants.len(), 2);
    assert_eq!(
        state.current_participant().map(|p| p.trainer_name.as_str()),
        Some("Ash")
    );

    let wild = state.monsters_on(TeamSide::Opponents);
    assert_eq!(wild.len(), 2);
    assert_eq!(wild.iter().filter(|m| m.is_active).count(), 1);
    assert!(wild.iter().all(|m| m.name == "Wild Pikachu"));

    let own = state.monsters_on(TeamSide::Players);
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].monster_id, Some(monster_id));
    assert!(own[0].is_active);

    Ok(())
}

/// Tests that NPC trainers make a trainer battle.
///
/// Expected: Ok with a trainer battle and the NPC's group on the field
#[tokio::test]
async fn starts_trainer_battle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_battle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (trainer, monster_id) = ash(db).await?;
    let encounter = factory::create_battle_encounter(db, &["Rival Gary"], &[12]).await?;

    let service = BattleService::new(db);
    let result = service
        .start_battle(encounter.id, "player-1", trainer.id, &[monster_id])
        .await?;
    let state = result.state;

    assert_eq!(state.battle.battle_type, BattleType::Trainer);
    assert!(state
        .participants
        .iter()
        .any(|p| p.trainer_name == "Rival Gary" && p.side == TeamSide::Opponents));
    let opponents = state.monsters_on(TeamSide::Opponents);
    assert_eq!(opponents.len(), 1);
    assert_eq!(opponents[0].level, 12);

    Ok(())
}

/// Tests that a monster of another trainer can't be brought along.
///
/// Expected: Err(NotOwner)
#[tokio::test]
async fn rejects_foreign_monster() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_battle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (trainer, _) = ash(db).await?;
    let other = factory::create_trainer(db, "player-2").await?;
    let stranger = factory::create_monster(db, &other).await?;
    let (encounter, _) = factory::create_wild_encounter(db, 1).await?;

    let service = BattleService::new(db);
    let result = service
        .start_battle(encounter.id, "player-1", trainer.id, &[stranger.id])
        .await;

    assert!(matches!(result, Err(AppError::GameErr(GameError::NotOwner))));

    Ok(())
}
