use super::*;
use crate::server::service::monster::MonsterService;

/// Tests that a claimed offspring becomes a level 1 monster with both parents.
///
/// Expected: Ok with the new monster linked to the parents and the index claimed
#[tokio::test]
async fn claims_offspring() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (trainer, mother, father) = breeding_pair(db).await?;

    let service = BreedingService::new(db);
    let session = service.breed(param(trainer.id, mother, father)).await?;
    let claim = service
        .claim(session.id, "player-1", 0, Some("Baby".to_string()))
        .await?;

    assert_eq!(claim.monster.name(), "Baby");
    assert_eq!(claim.monster.level(), 1);
    assert_eq!(claim.monster.profile.where_met, "Farm Breeding");
    assert_eq!(claim.session.claimed, vec![0]);

    let lineage = MonsterService::new(db).lineage(claim.monster.id).await?;
    assert_eq!(lineage.parents.len(), 2);

    Ok(())
}

/// Tests that an offspring can only be claimed once.
///
/// Expected: Err(AlreadyClaimed)
#[tokio::test]
async fn rejects_second_claim() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (trainer, mother, father) = breeding_pair(db).await?;

    let service = BreedingService::new(db);
    let session = service.breed(param(trainer.id, mother, father)).await?;
    service.claim(session.id, "player-1", 0, None).await?;
    let result = service.claim(session.id, "player-1", 0, None).await;

    assert!(matches!(
        result,
        Err(AppError::GameErr(GameError::AlreadyClaimed))
    ));

    Ok(())
}

/// Tests that another player can't claim from the session.
///
/// Expected: Err(NotOwner)
#[tokio::test]
async fn rejects_other_player() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (trainer, mother, father) = breeding_pair(db).await?;

    let service = BreedingService::new(db);
    let session = service.breed(param(trainer.id, mother, father)).await?;
    let result = service.claim(session.id, "player-2", 0, None).await;

    assert!(matches!(result, Err(AppError::GameErr(GameError::NotOwner))));

    Ok(())
}

/// Tests that an index past the litter is rejected.
///
/// Expected: Err(Rule)
#[tokio::test]
async fn rejects_out_of_range_index() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (trainer, mother, father) = breeding_pair(db).await?;

    let service = BreedingService::new(db);
    let session = service.breed(param(trainer.id, mother, father)).await?;
    let result = service.claim(session.id, "player-1", 10, None).await;

    assert!(matches!(result, Err(AppError::GameErr(GameError::Rule(_)))));

    Ok(())
}
