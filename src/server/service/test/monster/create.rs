use super::*;

fn template() -> MonsterTemplate {
    MonsterTemplate::new(
        "Sparky",
        vec!["Pikachu".to_string()],
        vec!["Electric".to_string()],
    )
    .level(5)
}

/// Tests that a created monster is initialized from the template.
///
/// Expected: Ok with the template's name, species and level and a moveset
#[tokio::test]
async fn creates_monster_from_template() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    factory::create_move(db, "Thunder Shock", "Electric", "Special", Some(40)).await?;

    let service = MonsterService::new(db);
    let monster = service
        .create(CreateMonsterParam::new(trainer.id, "player-1", template()))
        .await?;

    assert_eq!(monster.name(), "Sparky");
    assert_eq!(monster.level(), 5);
    assert_eq!(monster.trainer_id, trainer.id);
    assert_eq!(monster.profile.species, vec!["Pikachu".to_string()]);
    assert!(!monster.profile.moveset.is_empty());

    Ok(())
}

/// Tests that a template without types is rejected.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_missing_types() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;

    let service = MonsterService::new(db);
    let result = service
        .create(CreateMonsterParam::new(
            trainer.id,
            "player-1",
            MonsterTemplate::new("Nobody", vec!["Pikachu".to_string()], Vec::new()),
        ))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a monster can't be created for another player's trainer.
///
/// Expected: Err(NotOwner)
#[tokio::test]
async fn rejects_other_players_trainer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;

    let service = MonsterService::new(db);
    let result = service
        .create(CreateMonsterParam::new(trainer.id, "player-2", template()))
        .await;

    assert!(matches!(result, Err(AppError::GameErr(GameError::NotOwner))));

    Ok(())
}
