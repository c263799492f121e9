use super::*;

/// Tests that damage lowers the boss HP and shows up on the leaderboard.
///
/// Expected: Ok with 70 HP left and player-1 ranked above player-2
#[tokio::test]
async fn records_damage() -> Result<(), AppError> {
    let test = TestBuilder::new().with_boss_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let boss = factory::create_boss(db, "Mewtwo", 100).await?;

    let service = BossService::new(db);
    service.add_damage("player-2", 10, None).await?;
    let result = service.add_damage("player-1", 20, None).await?;

    assert_eq!(result.boss.current_hp, 70);
    assert!(!result.defeated);

    let stats = service.stats(boss.id, Some("player-2"), None).await?;
    assert_eq!(stats.total_damage, 30);
    assert_eq!(stats.participant_count, 2);
    assert_eq!(stats.player_damage, Some(10));
    assert_eq!(stats.leaderboard[0].player_user_id, "player-1");
    assert_eq!(stats.leaderboard[0].rank, 1);

    Ok(())
}

/// Tests that the finishing blow defeats the boss and hands out rewards.
///
/// Expected: Ok with the boss defeated, a top reward for the best player and
/// a grunt reward for the other
#[tokio::test]
async fn defeat_creates_rewards() -> Result<(), AppError> {
    let test = TestBuilder::new().with_boss_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_boss(db, "Mewtwo", 50).await?;

    let service = BossService::new(db);
    service.add_damage("player-2", 15, None).await?;
    let result = service.add_damage("player-1", 40, None).await?;

    assert!(result.defeated);
    assert_eq!(result.boss.current_hp, 0);

    let top = service.unclaimed_rewards("player-1").await?;
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].reward_type, TOP_REWARD);
    let grunt = service.unclaimed_rewards("player-2").await?;
    assert_eq!(grunt[0].reward_type, GRUNT_REWARD);

    assert!(matches!(service.active().await, Err(AppError::NotFound(_))));
    assert_eq!(service.defeated().await?.len(), 1);

    Ok(())
}

/// Tests that racing finishing blows hand out rewards only once.
///
/// Expected: exactly one hit reports the defeat, the late hits are Ok or
/// Err(NotFound), and each player holds a single reward
#[tokio::test]
async fn racing_hits_reward_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_boss_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_boss(db, "Mewtwo", 50).await?;

    let service = BossService::new(db);
    let (first, second, third) = tokio::join!(
        service.add_damage("player-1", 50, None),
        service.add_damage("player-2", 50, None),
        service.add_damage("player-3", 50, None),
    );

    let mut defeats = 0;
    for hit in [first, second, third] {
        match hit {
            Ok(result) if result.defeated => defeats += 1,
            Ok(_) | Err(AppError::NotFound(_)) => {}
            Err(e) => return Err(e),
        }
    }
    assert_eq!(defeats, 1);

    for player in ["player-1", "player-2", "player-3"] {
        assert!(service.unclaimed_rewards(player).await?.len() <= 1);
    }
    assert_eq!(service.defeated().await?.len(), 1);

    Ok(())
}

/// Tests that damage needs an active boss.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn needs_active_boss() -> Result<(), AppError> {
    let test = TestBuilder::new().with_boss_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BossService::new(db);
    let result = service.add_damage("player-1", 10, None).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that damage must be positive.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_zero_damage() -> Result<(), AppError> {
    let test = TestBuilder::new().with_boss_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_boss(db, "Mewtwo", 50).await?;

    let service = BossService::new(db);
    let result = service.add_damage("player-1", 0, None).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
