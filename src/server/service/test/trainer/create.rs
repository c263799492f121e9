use super::*;

/// Tests creating a trainer with a trimmed name.
///
/// Expected: Ok with a level 1 trainer and no coins
#[tokio::test]
async fn creates_trainer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TrainerService::new(db);
    let trainer = service
        .create(CreateTrainerParam {
            player_user_id: "player-1".to_string(),
            name: "Ash".to_string(),
        })
        .await?;

    assert_eq!(trainer.name, "Ash");
    assert_eq!(trainer.level, 1);
    assert_eq!(trainer.currency_amount, 0);

    Ok(())
}

/// Tests that a blank name is rejected.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_blank_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TrainerService::new(db);
    let result = service
        .create(CreateTrainerParam {
            player_user_id: "player-1".to_string(),
            name: "   ".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
