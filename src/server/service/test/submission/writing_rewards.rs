use super::*;

/// Tests that the word count is split between the participants.
///
/// Expected: Ok with 500 words giving the trainer and the monster 5 levels
/// and 250 coins each
#[tokio::test]
async fn splits_word_count() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_submission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    let monster = factory::create_monster(db, &trainer).await?;

    let service = SubmissionService::new(db);
    let rewards = service
        .writing_rewards(
            "player-1",
            writing(500, vec![trainer_entry(trainer.id)], vec![monster_entry(monster.id)]),
        )
        .await?;

    assert_eq!(rewards.total_levels, 10);
    assert_eq!(rewards.trainers[0].levels, 5);
    assert_eq!(rewards.trainers[0].coins, 250);
    assert_eq!(rewards.monsters[0].levels, 5);
    assert_eq!(rewards.gift_levels, 0);

    Ok(())
}

/// Tests that writing without participants is refused.
///
/// Expected: Err(Rule)
#[tokio::test]
async fn needs_participants() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_submission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SubmissionService::new(db);
    let result = service
        .writing_rewards("player-1", writing(500, Vec::new(), Vec::new()))
        .await;

    assert!(matches!(result, Err(AppError::GameErr(GameError::Rule(_)))));

    Ok(())
}

/// Tests that an unknown monster is reported before any formula runs.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_monster() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_submission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SubmissionService::new(db);
    let result = service
        .writing_rewards("player-1", writing(500, Vec::new(), vec![monster_entry(404)]))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that external writing earns a level per hundred words.
///
/// Expected: Ok with 3 levels for 350 words, and BadRequest for a negative count
#[tokio::test]
async fn external_writing_levels() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_submission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SubmissionService::new(db);
    let rewards = service.external_writing_rewards(350)?;

    assert_eq!(rewards.total_levels, 3);
    assert!(matches!(
        service.external_writing_rewards(-1),
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}
