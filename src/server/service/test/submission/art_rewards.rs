use super::*;

fn art(quality: &str, trainers: Vec<TrainerEntry>) -> ArtSubmission {
    ArtSubmission {
        quality: quality.to_string(),
        backgrounds: Vec::new(),
        uniquely_difficult: false,
        use_static_rewards: false,
        trainers,
        monsters: Vec::new(),
        npcs: Vec::new(),
    }
}

/// Tests that drawing another player's trainer counts as a gift.
///
/// Expected: Ok with the foreign trainer's levels counted as gift levels
#[tokio::test]
async fn foreign_trainer_is_gift() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_submission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let own = factory::create_trainer(db, "player-1").await?;
    let foreign = factory::create_trainer(db, "player-2").await?;

    let service = SubmissionService::new(db);
    let rewards = service
        .art_rewards(
            "player-1",
            art("rendered", vec![trainer_entry(own.id), trainer_entry(foreign.id)]),
        )
        .await?;

    assert!(rewards.trainers[0].is_owned);
    assert!(!rewards.trainers[1].is_owned);
    assert_eq!(rewards.gift_levels, rewards.trainers[1].levels);

    Ok(())
}

/// Tests that appearances add levels on top of the image quality.
///
/// Expected: Ok with more levels for the trainer shown in full
#[tokio::test]
async fn appearances_add_levels() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_submission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plain = factory::create_trainer(db, "player-1").await?;
    let shown = factory::create_trainer(db, "player-1").await?;
    let mut entry = trainer_entry(shown.id);
    entry.appearances = vec![Appearance {
        kind: "fullBody".to_string(),
        count: 1,
    }];

    let service = SubmissionService::new(db);
    let rewards = service
        .art_rewards("player-1", art("sketch", vec![trainer_entry(plain.id), entry]))
        .await?;

    assert!(rewards.trainers[1].levels > rewards.trainers[0].levels);

    Ok(())
}

/// Tests that an unknown quality is refused.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_unknown_quality() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_submission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;

    let service = SubmissionService::new(db);
    let result = service
        .art_rewards("player-1", art("masterpiece", vec![trainer_entry(trainer.id)]))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
