use super::*;

/// Tests loading several monsters at once.
///
/// Expected: Ok with the requested monsters ordered by ID
#[tokio::test]
async fn loads_requested_monsters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    let first = factory::create_monster(db, &trainer).await?;
    factory::create_monster(db, &trainer).await?;
    let third = factory::create_monster(db, &trainer).await?;

    let repo = MonsterRepository::new(db);
    let monsters = repo.get_by_ids(&[third.id, first.id]).await?;

    let ids: Vec<i32> = monsters.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![first.id, third.id]);

    Ok(())
}

/// Tests loading with no IDs.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MonsterRepository::new(db);
    let monsters = repo.get_by_ids(&[]).await?;

    assert!(monsters.is_empty());

    Ok(())
}
