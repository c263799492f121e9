use super::*;

/// Tests that applying a writing submission levels up and pays everyone involved.
///
/// Expected: Ok with trainer levels and coins credited, the monster at level
/// 15, the boss hit by the rolled damage and the submission stored
#[tokio::test]
async fn applies_writing_rewards() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_submission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    let monster = factory::create_monster(db, &trainer).await?;
    let boss = factory::create_boss(db, "Mewtwo", 100).await?;

    let service = SubmissionService::new(db);
    let applied = service
        .apply(
            "player-1",
            SubmissionInput::Writing(writing(
                500,
                vec![trainer_entry(trainer.id)],
                vec![monster_entry(monster.id)],
            )),
            "Chapter One".to_string(),
        )
        .await?;

    assert_eq!(applied.monsters.len(), 1);
    assert_eq!(applied.monsters[0].old_level, 10);
    assert_eq!(applied.monsters[0].new_level, 15);
    assert!(applied.boss_damage > 0);

    let leveled = TrainerService::new(db).get(trainer.id).await?;
    assert_eq!(leveled.level, trainer.level + 5);
    // trainer share plus the monster's share
    assert_eq!(leveled.currency_amount, trainer.currency_amount + 500);

    let monster = MonsterService::new(db).get(monster.id).await?;
    assert_eq!(monster.level(), 15);

    let boss = crate::server::service::boss::BossService::new(db)
        .get(boss.id)
        .await?;
    assert_eq!(boss.current_hp, 100 - applied.boss_damage);

    let stored = service.get(applied.submission_id).await?;
    assert_eq!(stored.title, "Chapter One");
    assert_eq!(service.list_by_player("player-1").await?.len(), 1);

    Ok(())
}

/// Tests that another player's trainer in a submission is never credited.
///
/// Expected: Ok with the foreign trainer's levels reported as a gift and its
/// level and coins unchanged
#[tokio::test]
async fn foreign_trainer_is_not_credited() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_submission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let own = factory::create_trainer(db, "player-1").await?;
    let foreign = factory::create_trainer(db, "player-2").await?;

    let applied = SubmissionService::new(db)
        .apply(
            "player-1",
            SubmissionInput::Writing(writing(
                1000,
                vec![trainer_entry(own.id), trainer_entry(foreign.id)],
                Vec::new(),
            )),
            "Crossover".to_string(),
        )
        .await?;

    assert_eq!(applied.gift_levels, 10);

    let trainers = TrainerService::new(db);
    let untouched = trainers.get(foreign.id).await?;
    assert_eq!(untouched.level, foreign.level);
    assert_eq!(untouched.currency_amount, foreign.currency_amount);

    let credited = trainers.get(own.id).await?;
    assert_eq!(credited.level, own.level + 10);
    assert_eq!(credited.currency_amount, own.currency_amount + 500);

    Ok(())
}

/// Tests that boss damage without an active boss is dropped quietly.
///
/// Expected: Ok with 0 boss damage
#[tokio::test]
async fn ignores_missing_boss() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_submission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;

    let applied = SubmissionService::new(db)
        .apply(
            "player-1",
            SubmissionInput::Writing(writing(100, vec![trainer_entry(trainer.id)], Vec::new())),
            "Short Story".to_string(),
        )
        .await?;

    assert_eq!(applied.boss_damage, 0);

    Ok(())
}

/// Tests that a submission needs a title.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn requires_title() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_submission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SubmissionService::new(db)
        .apply(
            "player-1",
            SubmissionInput::ExternalWriting { word_count: 200 },
            "  ".to_string(),
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
