use super::*;

/// Tests that earning coins also raises the total earned.
///
/// Expected: Ok with balance and total earned both increased
#[tokio::test]
async fn earning_raises_total_earned() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = TrainerFactory::new(db, "player-1")
        .currency_amount(100)
        .build()
        .await?;

    let repo = TrainerRepository::new(db);
    let updated = repo.add_coins(trainer.id, 50).await?;

    assert_eq!(updated.currency_amount, 150);
    assert_eq!(updated.total_earned_currency, 50);

    Ok(())
}

/// Tests that spending coins leaves the total earned untouched.
///
/// Expected: Ok with balance reduced and total earned unchanged
#[tokio::test]
async fn spending_keeps_total_earned() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = TrainerFactory::new(db, "player-1")
        .currency_amount(100)
        .build()
        .await?;

    let repo = TrainerRepository::new(db);
    let updated = repo.add_coins(trainer.id, -40).await?;

    assert_eq!(updated.currency_amount, 60);
    assert_eq!(updated.total_earned_currency, 0);

    Ok(())
}
