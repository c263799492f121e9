use super::*;

/// Tests counting captures per player and group.
///
/// Verifies that captures by other players and from other groups do not
/// count.
///
/// Expected: Ok with only the player's captures from the group counted
#[tokio::test]
async fn counts_only_players_captures_from_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_encounter_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::create_trainer(db, "player-1").await?;
    let first = factory::create_monster(db, &trainer).await?;
    let second = factory::create_monster(db, &trainer).await?;
    let (encounter, group) = factory::create_wild_encounter(db, 3).await?;
    let other_group = factory::encounter::create_group(
        db,
        encounter.id,
        1,
        &["Pidgey"],
        &["Normal", "Flying"],
        1,
        5,
    )
    .await?;

    let repo = CaptureRepository::new(db);
    repo.create(encounter.id, group.id, "player-1", first.id).await?;
    repo.create(encounter.id, group.id, "player-2", second.id).await?;
    repo.create(encounter.id, other_group.id, "player-1", second.id)
        .await?;

    assert_eq!(repo.count_for_player(group.id, "player-1").await?, 1);
    assert_eq!(repo.count_for_player(group.id, "player-3").await?, 0);

    Ok(())
}
