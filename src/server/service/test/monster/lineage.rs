use super::*;

/// Tests that parents and children are linked both ways.
///
/// Expected: Ok with the child listing both parents and each parent the child
#[tokio::test]
async fn links_parents_and_children() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    let mother = MonsterFactory::new(db, &trainer).name("Mother").build().await?;
    let father = MonsterFactory::new(db, &trainer).name("Father").build().await?;
    let child = MonsterFactory::new(db, &trainer).name("Child").build().await?;

    let service = MonsterService::new(db);
    service.add_parents(child.id, &[mother.id, father.id]).await?;

    let lineage = service.lineage(child.id).await?;
    assert_eq!(lineage.parents.len(), 2);
    assert!(lineage.children.is_empty());

    let mother_lineage = service.lineage(mother.id).await?;
    assert_eq!(mother_lineage.children.len(), 1);
    assert_eq!(mother_lineage.children[0].id, child.id);

    Ok(())
}

/// Tests that an unknown parent is reported.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_parent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    let child = factory::create_monster(db, &trainer).await?;

    let service = MonsterService::new(db);
    let result = service.add_parents(child.id, &[999]).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
