use super::*;

/// Tests that a new boss starts active at full HP.
///
/// Expected: Ok with the boss returned by active()
#[tokio::test]
async fn creates_active_boss() -> Result<(), AppError> {
    let test = TestBuilder::new().with_boss_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BossService::new(db);
    let boss = service.create(boss_param("Mewtwo", 500)).await?;

    assert_eq!(boss.current_hp, 500);
    assert!(!boss.is_defeated());
    assert_eq!(service.active().await?.id, boss.id);

    Ok(())
}

/// Tests that a boss needs HP.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_zero_hp() -> Result<(), AppError> {
    let test = TestBuilder::new().with_boss_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BossService::new(db);
    let result = service.create(boss_param("Mewtwo", 0)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a boss needs a name.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_blank_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_boss_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BossService::new(db);
    let result = service.create(boss_param("  ", 100)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
