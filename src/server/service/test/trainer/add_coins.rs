use super::*;

/// Tests that coins are credited to the balance.
///
/// Expected: Ok with the balance raised
#[tokio::test]
async fn credits_coins() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = TrainerFactory::new(db, "player-1")
        .currency_amount(10)
        .build()
        .await?;

    let service = TrainerService::new(db);
    let updated = service.add_coins(trainer.id, 90).await?;

    assert_eq!(updated.currency_amount, 100);

    Ok(())
}

/// Tests that spending more than the balance is refused.
///
/// Expected: Err(Rule) and the balance unchanged
#[tokio::test]
async fn refuses_overdraw() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = TrainerFactory::new(db, "player-1")
        .currency_amount(10)
        .build()
        .await?;

    let service = TrainerService::new(db);
    let result = service.add_coins(trainer.id, -20).await;

    assert!(matches!(result, Err(AppError::GameErr(GameError::Rule(_)))));
    assert_eq!(service.get(trainer.id).await?.currency_amount, 10);

    Ok(())
}

/// Tests that a credit which would overflow the balance is refused.
///
/// Expected: Err(BadRequest) and the balance unchanged
#[tokio::test]
async fn refuses_overflowing_credit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = TrainerFactory::new(db, "player-1")
        .currency_amount(10)
        .build()
        .await?;

    let service = TrainerService::new(db);
    let result = service.add_coins(trainer.id, i32::MAX).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(service.get(trainer.id).await?.currency_amount, 10);

    Ok(())
}

/// Tests that a debit of i32::MIN is refused rather than wrapping.
///
/// Expected: Err(BadRequest) and the balance unchanged
#[tokio::test]
async fn refuses_overflowing_debit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = TrainerFactory::new(db, "player-1")
        .currency_amount(-1)
        .build()
        .await?;

    let service = TrainerService::new(db);
    let result = service.add_coins(trainer.id, i32::MIN).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(service.get(trainer.id).await?.currency_amount, -1);

    Ok(())
}
