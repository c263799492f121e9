use super::*;

/// Tests expiring breeding sessions.
///
/// Expected: Ok(0) for a cutoff in the past, Ok(1) for a cutoff in the future
#[tokio::test]
async fn deletes_sessions_before_cutoff() -> Result<(), DbErr> {
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

    let kept = repo
        .delete_older_than(Utc::now() - Duration::hours(1))
        .await?;
    assert_eq!(kept, 0);

    let deleted = repo
        .delete_older_than(Utc::now() + Duration::hours(1))
        .await?;
    assert_eq!(deleted, 1);
    assert!(repo.get_by_id(session.id).await?.is_none());

    Ok(())
}
