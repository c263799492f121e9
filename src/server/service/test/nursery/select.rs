use super::*;

/// Tests that picking an option creates a level 1 monster.
///
/// Expected: Ok with the monster owned by the session's trainer and the pick recorded
#[tokio::test]
async fn selects_option() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = nursery_trainer(db, 1).await?;

    let service = NurseryService::new(db);
    let session = service.start_hatch(hatch(trainer.id, 1)).await?;
    let egg_id = session.eggs[0].egg_id;
    let selection = service.select(session.id, pick(egg_id, 0, false)).await?;

    assert_eq!(selection.monster.trainer_id, trainer.id);
    assert_eq!(selection.monster.level(), 1);
    assert_eq!(selection.session.claimed.len(), 1);

    Ok(())
}

/// Tests that a second pick from one egg needs an Edenwiess.
///
/// Expected: Err(Rule) without the flag, then Ok with it and the berry used up
#[tokio::test]
async fn second_pick_needs_edenwiess() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = nursery_trainer(db, 1).await?;
    factory::give_item(db, trainer.id, "berries", "Edenwiess", 1).await?;

    let service = NurseryService::new(db);
    let session = service.start_hatch(hatch(trainer.id, 1)).await?;
    let egg = &session.eggs[0];
    assert!(egg.monsters.len() >= 2);

    service.select(session.id, pick(egg.egg_id, 0, false)).await?;

    let refused = service.select(session.id, pick(egg.egg_id, 1, false)).await;
    assert!(matches!(refused, Err(AppError::GameErr(GameError::Rule(_)))));

    let selection = service.select(session.id, pick(egg.egg_id, 1, true)).await?;
    assert_eq!(selection.session.claimed.len(), 2);
    assert!(!TrainerService::new(db)
        .has_item(trainer.id, "berries", "Edenwiess", 1)
        .await?);

    Ok(())
}

/// Tests that the same option can't be picked twice.
///
/// Expected: Err(AlreadyClaimed)
#[tokio::test]
async fn rejects_claimed_option() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = nursery_trainer(db, 1).await?;

    let service = NurseryService::new(db);
    let session = service.start_hatch(hatch(trainer.id, 1)).await?;
    let egg_id = session.eggs[0].egg_id;
    service.select(session.id, pick(egg_id, 0, false)).await?;
    let result = service.select(session.id, pick(egg_id, 0, true)).await;

    assert!(matches!(
        result,
        Err(AppError::GameErr(GameError::AlreadyClaimed))
    ));

    Ok(())
}
