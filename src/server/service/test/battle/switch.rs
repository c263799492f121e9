use super::*;

/// Tests that a second monster can be released and the first withdrawn.
///
/// Expected: Ok with Bulky joining the field, then Sparky benched
#[tokio::test]
async fn releases_and_withdraws() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_battle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (trainer, battle_id) = wild_battle(db, 1).await?;
    MonsterFactory::new(db, &trainer).name("Bulky").build().await?;

    let service = BattleService::new(db);
    let released = service
        .release(battle_id, monster_action("player-1", "bulky"))
        .await?;
    let own = released.state.monsters_on(TeamSide::Players);
    assert_eq!(own.len(), 2);
    assert!(own.iter().all(|m| m.is_active));

    let withdrawn = service
        .withdraw(battle_id, monster_action("player-1", "Sparky"))
        .await?;
    let sparky = withdrawn
        .state
        .monsters_on(TeamSide::Players)
        .into_iter()
        .find(|m| m.name == "Sparky")
        .cloned()
        .unwrap();
    assert!(!sparky.is_active);

    Ok(())
}

/// Tests that the last fighting monster stays on the field.
///
/// Expected: Err(Rule)
#[tokio::test]
async fn keeps_last_monster() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_battle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, battle_id) = wild_battle(db, 1).await?;

    let service = BattleService::new(db);
    let result = service
        .withdraw(battle_id, monster_action("player-1", "Sparky"))
        .await;

    assert!(matches!(result, Err(AppError::GameErr(GameError::Rule(_)))));

    Ok(())
}

/// Tests that a monster already on the field can't be released again.
///
/// Expected: Err(Rule)
#[tokio::test]
async fn rejects_active_release() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_battle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, battle_id) = wild_battle(db, 1).await?;

    let service = BattleService::new(db);
    let result = service
        .release(battle_id, monster_action("player-1", "Sparky"))
        .await;

    assert!(matches!(result, Err(AppError::GameErr(GameError::Rule(_)))));

    Ok(())
}
