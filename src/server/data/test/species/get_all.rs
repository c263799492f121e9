use super::*;

/// Tests listing the whole catalogue.
///
/// Expected: Ok with every species ordered by name
#[tokio::test]
async fn lists_species_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_species(db, "Squirtle", &["Water"]).await?;
    factory::create_species(db, "Bulbasaur", &["Grass", "Poison"]).await?;
    SpeciesFactory::new(db, "Agumon")
        .franchise("digimon")
        .types(&["Fire"])
        .build()
        .await?;

    let repo = SpeciesRepository::new(db);
    let species = repo.get_all(None).await?;

    let names: Vec<&str> = species.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Agumon", "Bulbasaur", "Squirtle"]);

    Ok(())
}

/// Tests listing one franchise.
///
/// Expected: Ok with only that franchise's species
#[tokio::test]
async fn filters_by_franchise() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_species(db, "Squirtle", &["Water"]).await?;
    SpeciesFactory::new(db, "Agumon")
        .franchise("digimon")
        .types(&["Fire"])
        .build()
        .await?;

    let repo = SpeciesRepository::new(db);
    let species = repo.get_all(Some(MonsterTable::Digimon)).await?;

    assert_eq!(species.len(), 1);
    assert_eq!(species[0].name, "Agumon");

    Ok(())
}
