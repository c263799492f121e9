use super::*;

/// Tests that a reroll costs a Forget-Me-Not and clears the claims.
///
/// Expected: Ok with no claims and the berry used up
#[tokio::test]
async fn rerolls_for_forget_me_not() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (trainer, mother, father) = breeding_pair(db).await?;
    factory::give_item(db, trainer.id, "berries", "Forget-Me-Not", 1).await?;

    let service = BreedingService::new(db);
    let session = service.breed(param(trainer.id, mother, father)).await?;
    service.claim(session.id, "player-1", 0, None).await?;

    let rerolled = service.reroll(session.id, "player-1").await?;

    assert!(rerolled.claimed.is_empty());
    assert!(!rerolled.offspring.is_empty());
    assert!(!TrainerService::new(db)
        .has_item(trainer.id, "berries", "Forget-Me-Not", 1)
        .await?);

    Ok(())
}

/// Tests that a reroll without a Forget-Me-Not fails.
///
/// Expected: Err(MissingItem)
#[tokio::test]
async fn requires_forget_me_not() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (trainer, mother, father) = breeding_pair(db).await?;

    let service = BreedingService::new(db);
    let session = service.breed(param(trainer.id, mother, father)).await?;
    let result = service.reroll(session.id, "player-1").await;

    assert!(matches!(
        result,
        Err(AppError::GameErr(GameError::MissingItem { .. }))
    ));

    Ok(())
}
