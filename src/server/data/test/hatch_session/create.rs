use super::*;

/// Tests storing hatched eggs.
///
/// Expected: Ok with every egg and option kept and nothing claimed
#[tokio::test]
async fn stores_eggs_unclaimed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;

    let repo = HatchSessionRepository::new(db);
    let session = repo.create(new_session(trainer.id)).await?;

    assert_eq!(session.eggs, vec![egg(1), egg(2)]);
    assert!(session.claimed.is_empty());

    let stored = repo.get_by_id(session.id).await?.unwrap();
    assert_eq!(stored.eggs[1].monsters[1].attribute.as_deref(), Some("Vaccine"));

    Ok(())
}
