use super::*;

/// Tests that a throw always uses up the ball and a catch goes to the trainer.
///
/// Expected: Ok, no Poke Ball left, and any caught monster owned by Ash
#[tokio::test]
async fn throw_uses_ball() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_encounter_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = TrainerFactory::new(db, "player-1").name("Ash").build().await?;
    factory::give_item(db, trainer.id, "balls", "Poke Ball", 1).await?;
    let (encounter, _) = factory::create_wild_encounter(db, 2).await?;

    let service = EncounterService::new(db);
    let outcome = service.capture(throw(encounter.id, "poké ball", 1)).await?;

    assert_eq!(outcome.ball, "Poke Ball");
    assert!(!TrainerService::new(db)
        .has_item(trainer.id, "balls", "Poke Ball", 1)
        .await?);
    if outcome.success {
        let monster = outcome.monster.as_ref().unwrap();
        assert_eq!(monster.trainer_id, trainer.id);
        assert!((5..=14).contains(&monster.level()));
        assert_eq!(outcome.remaining, 1);
    } else {
        assert!(outcome.monster.is_none());
        assert_eq!(outcome.remaining, 2);
    }

    Ok(())
}

/// Tests that a throw without the ball fails.
///
/// Expected: Err(MissingItem)
#[tokio::test]
async fn needs_ball() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_encounter_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    TrainerFactory::new(db, "player-1").name("Ash").build().await?;
    let (encounter, _) = factory::create_wild_encounter(db, 1).await?;

    let service = EncounterService::new(db);
    let result = service.capture(throw(encounter.id, "Ultra Ball", 1)).await;

    assert!(matches!(
        result,
        Err(AppError::GameErr(GameError::MissingItem { .. }))
    ));

    Ok(())
}

/// Tests that an unknown ball is rejected before anything is consumed.
///
/// Expected: Err(Rule)
#[tokio::test]
async fn rejects_unknown_ball() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_encounter_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    TrainerFactory::new(db, "player-1").name("Ash").build().await?;
    let (encounter, _) = factory::create_wild_encounter(db, 1).await?;

    let service = EncounterService::new(db);
    let result = service.capture(throw(encounter.id, "Moon Ball", 1)).await;

    assert!(matches!(result, Err(AppError::GameErr(GameError::Rule(_)))));

    Ok(())
}

/// Tests that the group index is checked against the encounter.
///
/// Expected: Err(Rule)
#[tokio::test]
async fn rejects_unknown_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_encounter_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = TrainerFactory::new(db, "player-1").name("Ash").build().await?;
    factory::give_item(db, trainer.id, "balls", "Poke Ball", 1).await?;
    let (encounter, _) = factory::create_wild_encounter(db, 1).await?;

    let service = EncounterService::new(db);
    let result = service.capture(throw(encounter.id, "Poke Ball", 2)).await;

    assert!(matches!(result, Err(AppError::GameErr(GameError::Rule(_)))));

    Ok(())
}

/// Tests that battle encounters can't be captured from.
///
/// Expected: Err(Rule)
#[tokio::test]
async fn rejects_battle_encounter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_encounter_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = TrainerFactory::new(db, "player-1").name("Ash").build().await?;
    factory::give_item(db, trainer.id, "balls", "Poke Ball", 1).await?;
    let encounter = factory::create_battle_encounter(db, &["Rival"], &[12]).await?;

    let service = EncounterService::new(db);
    let result = service.capture(throw(encounter.id, "Poke Ball", 1)).await;

    assert!(matches!(result, Err(AppError::GameErr(GameError::Rule(_)))));

    Ok(())
}

/// Tests that the odds follow the caught monster's rolled level rather than the
/// group's listed level.
///
/// Expected: Ok with a chance no lower than the worst rolled level allows,
/// matching the caught monster's level on success
#[tokio::test]
async fn odds_follow_rolled_level() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_encounter_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = TrainerFactory::new(db, "player-1").name("Ash").build().await?;
    factory::give_item(db, trainer.id, "balls", "Poke Ball", 1).await?;
    // a level 60 group would floor the odds at 5%
    let (encounter, _) = factory::create_wild_encounter_at_level(db, 1, 60).await?;

    let outcome = EncounterService::new(db)
        .capture(throw(encounter.id, "Poke Ball", 1))
        .await?;

    // Poke Ball rate minus the penalty of a level 14 roll
    assert!(outcome.chance >= 0.5 - 0.08 - f64::EPSILON);
    if let Some(monster) = outcome.monster.as_ref() {
        let penalty = (f64::from(monster.level() - 10) * 0.02).max(0.0);
        assert!((outcome.chance - (0.5 - penalty)).abs() < 1e-9);
    }

    Ok(())
}

/// Tests that a group can't be caught from once the player has taken all of it.
///
/// Expected: Err(Rule) on the throw after the only monster was caught, with the
/// second ball kept
#[tokio::test]
async fn refuses_exhausted_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_encounter_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = TrainerFactory::new(db, "player-1").name("Ash").build().await?;
    factory::give_item(db, trainer.id, "balls", "Master Ball", 40).await?;
    let (encounter, _) = factory::create_wild_encounter(db, 1).await?;

    let service = EncounterService::new(db);
    // 95% per throw; keep throwing until the single monster is caught
    let mut caught = false;
    for _ in 0..40 {
        if service
            .capture(throw(encounter.id, "Master Ball", 1))
            .await?
            .success
        {
            caught = true;
            break;
        }
    }
    assert!(caught);

    let trainers = TrainerService::new(db);
    let before = trainers.inventory(trainer.id).await?;
    let result = service.capture(throw(encounter.id, "Master Ball", 1)).await;

    assert!(matches!(result, Err(AppError::GameErr(GameError::Rule(_)))));
    assert_eq!(trainers.inventory(trainer.id).await?, before);

    Ok(())
}
