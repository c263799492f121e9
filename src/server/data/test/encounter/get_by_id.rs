use super::*;

/// Tests loading an encounter with its groups.
///
/// Expected: Ok with groups ordered by position
#[tokio::test]
async fn loads_groups_by_position() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_encounter_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let encounter = factory::create_battle_encounter(db, &["Youngster Joey"], &[8, 12, 16]).await?;

    let repo = EncounterRepository::new(db);
    let loaded = repo.get_by_id(encounter.id).await?.unwrap();

    let levels: Vec<i32> = loaded.groups.iter().map(|g| g.level).collect();
    assert_eq!(levels, vec![8, 12, 16]);
    assert_eq!(loaded.npc_trainers[0].name, "Youngster Joey");

    Ok(())
}

/// Tests loading an encounter that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_encounter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_encounter_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EncounterRepository::new(db);

    assert!(repo.get_by_id(42).await?.is_none());

    Ok(())
}
