use super::*;

/// Tests deleting a trainer.
///
/// Expected: Ok and the trainer can no longer be found
#[tokio::test]
async fn deletes_trainer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;

    let repo = TrainerRepository::new(db);
    repo.delete(trainer.id).await?;

    assert!(repo.get_by_id(trainer.id).await?.is_none());

    Ok(())
}
