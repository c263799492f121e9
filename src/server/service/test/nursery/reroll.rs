use super::*;

/// Tests that a reroll hatches the same number of eggs and resets claims.
///
/// Expected: Ok with one egg, no claims and the Forget-Me-Not used up
#[tokio::test]
async fn rerolls_eggs() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = nursery_trainer(db, 1).await?;
    factory::give_item(db, trainer.id, "berries", "Forget-Me-Not", 1).await?;

    let service = NurseryService::new(db);
    let session = service.start_hatch(hatch(trainer.id, 1)).await?;
    let egg_id = session.eggs[0].egg_id;
    service.select(session.id, pick(egg_id, 0, false)).await?;

    let rerolled = service.reroll(session.id, "player-1").await?;

    assert_eq!(rerolled.eggs.len(), 1);
    assert!(rerolled.claimed.is_empty());
    assert!(!TrainerService::new(db)
        .has_item(trainer.id, "berries", "Forget-Me-Not", 1)
        .await?);

    Ok(())
}
