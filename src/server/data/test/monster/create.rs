use super::*;

/// Tests storing a monster from a profile.
///
/// Uses the profile of an existing monster so every column is populated, then
/// checks that the copy reads back with the same game data.
///
/// Expected: Ok with a new monster carrying the same profile
#[tokio::test]
async fn stores_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    let source = MonsterFactory::new(db, &trainer)
        .species2(Some("Eevee"))
        .type2(Some("Normal"))
        .moveset(&["Tackle", "Thunder Shock"])
        .build()
        .await?;

    let repo = MonsterRepository::new(db);
    let profile = repo.get_by_id(source.id).await?.unwrap().profile;
    let created = repo.create(trainer.id, "player-1", &profile).await?;

    assert_ne!(created.id, source.id);
    assert_eq!(created.trainer_id, trainer.id);
    assert_eq!(created.player_user_id, "player-1");
    assert_eq!(created.profile, profile);
    assert_eq!(created.profile.species, vec!["Pikachu", "Eevee"]);
    assert_eq!(created.profile.types, vec!["Electric", "Normal"]);

    Ok(())
}
