use super::*;
use crate::server::engine::damage::Weather;

/// Tests that the weather can be changed mid-battle.
///
/// Expected: Ok with rain stored on the battle
#[tokio::test]
async fn sets_weather() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_battle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, battle_id) = wild_battle(db, 1).await?;

    let service = BattleService::new(db);
    let state = service.set_weather(battle_id, "rain").await?;

    assert_eq!(state.battle.conditions.weather, Weather::Rain);

    Ok(())
}

/// Tests that unknown weather is rejected.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_unknown_weather() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_battle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, battle_id) = wild_battle(db, 1).await?;

    let service = BattleService::new(db);
    let result = service.set_weather(battle_id, "meteor shower").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a knockout limit below one is rejected.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_zero_knockout_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_battle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, battle_id) = wild_battle(db, 1).await?;

    let service = BattleService::new(db);
    let result = service.set_win_condition(battle_id, 0).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a new knockout limit is stored.
///
/// Expected: Ok with the limit at 3 and the battle still running
#[tokio::test]
async fn sets_knockout_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_battle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, battle_id) = wild_battle(db, 1).await?;

    let service = BattleService::new(db);
    let state = service.set_win_condition(battle_id, 3).await?;

    assert_eq!(state.battle.knockout_limit, 3);
    assert_eq!(state.battle.status, BattleStatus::Active);

    Ok(())
}
