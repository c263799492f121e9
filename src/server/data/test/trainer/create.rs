use super::*;

/// Tests creating a trainer.
///
/// Verifies that a new trainer starts at level 1 with no coins and is stored
/// for the given player.
///
/// Expected: Ok with trainer created
#[tokio::test]
async fn creates_trainer_at_level_one() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TrainerRepository::new(db);
    let trainer = repo
        .create(CreateTrainerParam {
            player_user_id: "player-1".to_string(),
            name: "Ash".to_string(),
        })
        .await?;

    assert_eq!(trainer.name, "Ash");
    assert_eq!(trainer.level, 1);
    assert_eq!(trainer.currency_amount, 0);
    assert_eq!(trainer.total_earned_currency, 0);

    let stored = entity::prelude::Trainer::find_by_id(trainer.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}
