use super::*;

/// Tests saving a changed profile.
///
/// Expected: Ok with level, stats and moveset updated
#[tokio::test]
async fn saves_changed_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    let entity = factory::create_monster(db, &trainer).await?;

    let repo = MonsterRepository::new(db);
    let mut profile = repo.get_by_id(entity.id).await?.unwrap().profile;
    profile.level = 25;
    profile.stats.atk = 77;
    profile.moveset.push("Thunderbolt".to_string());

    let updated = repo.update_profile(entity.id, &profile).await?;

    assert_eq!(updated.level(), 25);
    assert_eq!(updated.profile.stats.atk, 77);
    assert!(updated.profile.moveset.contains(&"Thunderbolt".to_string()));

    Ok(())
}

/// Tests updating a monster that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_monster() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    let entity = factory::create_monster(db, &trainer).await?;

    let repo = MonsterRepository::new(db);
    let profile = repo.get_by_id(entity.id).await?.unwrap().profile;
    let result = repo.update_profile(999, &profile).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
