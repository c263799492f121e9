use super::*;

/// Tests that hatching uses up an egg and an incubator per egg.
///
/// Expected: Ok with two eggs of options and the items consumed
#[tokio::test]
async fn hatches_eggs() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = nursery_trainer(db, 2).await?;

    let service = NurseryService::new(db);
    let session = service.start_hatch(hatch(trainer.id, 2)).await?;

    assert_eq!(session.eggs.len(), 2);
    assert!(session.eggs.iter().all(|egg| !egg.monsters.is_empty()));

    let trainers = TrainerService::new(db);
    assert!(!trainers.has_item(trainer.id, "eggs", "Standard Egg", 1).await?);
    assert!(!trainers.has_item(trainer.id, "eggs", "Incubator", 1).await?);

    Ok(())
}

/// Tests that an image of the hatching replaces the incubator.
///
/// Expected: Ok with the incubators untouched
#[tokio::test]
async fn image_replaces_incubator() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = nursery_trainer(db, 1).await?;

    let mut param = hatch(trainer.id, 1);
    param.use_incubator = false;
    param.image_url = Some("https://example.com/hatch.png".to_string());

    let service = NurseryService::new(db);
    service.start_hatch(param).await?;

    assert!(TrainerService::new(db)
        .has_item(trainer.id, "eggs", "Incubator", 1)
        .await?);

    Ok(())
}

/// Tests that hatching without incubator or image is refused.
///
/// Expected: Err(Rule)
#[tokio::test]
async fn needs_incubator_or_image() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = nursery_trainer(db, 1).await?;

    let mut param = hatch(trainer.id, 1);
    param.use_incubator = false;

    let service = NurseryService::new(db);
    let result = service.start_hatch(param).await;

    assert!(matches!(result, Err(AppError::GameErr(GameError::Rule(_)))));

    Ok(())
}

/// Tests that hatching more eggs than held fails.
///
/// Expected: Err(MissingItem)
#[tokio::test]
async fn needs_enough_eggs() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = nursery_trainer(db, 1).await?;

    let service = NurseryService::new(db);
    let result = service.start_hatch(hatch(trainer.id, 2)).await;

    assert!(matches!(
        result,
        Err(AppError::GameErr(GameError::MissingItem { .. }))
    ));

    Ok(())
}

/// Tests that zero eggs is outside the allowed range.
///
/// Expected: Err(Rule)
#[tokio::test]
async fn rejects_zero_eggs() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = nursery_trainer(db, 1).await?;

    let service = NurseryService::new(db);
    let result = service.start_hatch(hatch(trainer.id, 0)).await;

    assert!(matches!(result, Err(AppError::GameErr(GameError::Rule(_)))));

    Ok(())
}
