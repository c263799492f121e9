use super::*;

/// Tests recording a claimed offspring.
///
/// Expected: Ok with the claimed index stored
#[tokio::test]
async fn records_claims() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    let mother = factory::create_monster(db, &trainer).await?;
    let father = factory::create_monster(db, &trainer).await?;

    let repo = BreedingSessionRepository::new(db);
    let session = repo.create(new_session(trainer.id, mother.id, father.id)).await?;
    let updated = repo.update(session.id, &session.offspring, &[1]).await?;

    assert!(updated.is_claimed(1));
    assert!(!updated.is_claimed(0));

    Ok(())
}

/// Tests updating a session that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BreedingSessionRepository::new(db);
    let result = repo.update(7, &[], &[]).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
