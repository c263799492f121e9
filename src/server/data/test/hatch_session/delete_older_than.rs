use super::*;

/// Tests expiring hatch sessions.
///
/// Expected: Ok(1) and the session is gone
#[tokio::test]
async fn deletes_sessions_before_cutoff() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;

    let repo = HatchSessionRepository::new(db);
    let session = repo.create(new_session(trainer.id)).await?;

    assert_eq!(repo.delete_older_than(Utc::now() - Duration::hours(1)).await?, 0);
    assert_eq!(repo.delete_older_than(Utc::now() + Duration::hours(1)).await?, 1);
    assert!(repo.get_by_id(session.id).await?.is_none());

    Ok(())
}
