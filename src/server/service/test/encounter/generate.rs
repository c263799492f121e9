use super::*;

/// Tests that a forced wild encounter has groups within the level range.
///
/// Expected: Ok with at least one group, every level between 20 and 25
#[tokio::test]
async fn generates_wild_encounter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_encounter_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_species(db, "Pikachu", &["Electric"]).await?;
    factory::create_species(db, "Oddish", &["Grass", "Poison"]).await?;

    let location = EncounterLocation {
        level_min: Some(20),
        level_max: Some(25),
        ..Default::default()
    };

    let service = EncounterService::new(db);
    let encounter = service
        .generate(
            Some(EncounterKind::Wild),
            location,
            UserSettings::default(),
            Some("meadow".to_string()),
        )
        .await?;

    assert_eq!(encounter.kind, EncounterKind::Wild);
    assert!(!encounter.groups.is_empty());
    assert!(encounter
        .groups
        .iter()
        .all(|g| (20..=25).contains(&g.level) && g.count > 0));

    let stored = service.get(encounter.id).await?;
    assert_eq!(stored.groups.len(), encounter.groups.len());

    Ok(())
}

/// Tests that the same seed generates the same encounter.
///
/// Expected: Ok with matching kind and group species
#[tokio::test]
async fn seed_is_reproducible() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_encounter_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_species(db, "Pikachu", &["Electric"]).await?;
    factory::create_species(db, "Oddish", &["Grass", "Poison"]).await?;

    let service = EncounterService::new(db);
    let first = service
        .generate(
            None,
            EncounterLocation::default(),
            UserSettings::default(),
            Some("cave".to_string()),
        )
        .await?;
    let second = service
        .generate(
            None,
            EncounterLocation::default(),
            UserSettings::default(),
            Some("cave".to_string()),
        )
        .await?;

    let species = |e: &crate::server::model::encounter::Encounter| {
        e.groups.iter().map(|g| g.species.clone()).collect::<Vec<_>>()
    };
    assert_eq!(first.kind, second.kind);
    assert_eq!(species(&first), species(&second));

    Ok(())
}

/// Tests that a forced item encounter carries an item.
///
/// Expected: Ok with an item and no groups
#[tokio::test]
async fn generates_item_encounter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_encounter_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = EncounterService::new(db);
    let encounter = service
        .generate(
            Some(EncounterKind::Item),
            EncounterLocation::default(),
            UserSettings::default(),
            None,
        )
        .await?;

    assert_eq!(encounter.kind, EncounterKind::Item);
    assert!(encounter.item.is_some());
    assert!(encounter.groups.is_empty());

    Ok(())
}
