use super::*;

/// Tests recording both parents of a monster.
///
/// Expected: Ok with the parents listed for the child and the child listed
/// for each parent
#[tokio::test]
async fn links_parents_and_children() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    let mother = factory::create_monster(db, &trainer).await?;
    let father = factory::create_monster(db, &trainer).await?;
    let child = factory::create_monster(db, &trainer).await?;

    let repo = LineageRepository::new(db);
    repo.add(child.id, &[mother.id, father.id]).await?;

    assert_eq!(repo.parent_ids(child.id).await?, vec![mother.id, father.id]);
    assert_eq!(repo.child_ids(mother.id).await?, vec![child.id]);
    assert_eq!(repo.child_ids(father.id).await?, vec![child.id]);

    Ok(())
}

/// Tests that adding an existing link again does not duplicate it.
///
/// Expected: Ok with each parent listed once
#[tokio::test]
async fn skips_existing_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trainer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    let parent = factory::create_monster(db, &trainer).await?;
    let child = factory::create_monster(db, &trainer).await?;

    let repo = LineageRepository::new(db);
    repo.add(child.id, &[parent.id]).await?;
    repo.add(child.id, &[parent.id]).await?;

    assert_eq!(repo.parent_ids(child.id).await?, vec![parent.id]);

    Ok(())
}
