use super::*;

/// Tests storing a new litter.
///
/// Expected: Ok with offspring and extra items kept and nothing claimed
#[tokio::test]
async fn stores_offspring_unclaimed() -> Result<(), DbErr> {
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

    assert_eq!(session.offspring.len(), 2);
    assert_eq!(session.offspring[0].species, vec!["Eevee"]);
    assert_eq!(session.extra_items.get("Mystery Egg Charm"), Some(&1));
    assert!(session.claimed.is_empty());

    let stored = repo.get_by_id(session.id).await?.unwrap();
    assert_eq!(stored.offspring, session.offspring);
    assert_eq!(stored.parent1_id, mother.id);

    Ok(())
}
