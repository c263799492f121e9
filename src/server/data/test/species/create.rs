use super::*;

/// Tests adding a species to the catalogue.
///
/// Verifies that types and breeding results survive the trip through their
/// column layout.
///
/// Expected: Ok with species created
#[tokio::test]
async fn creates_species() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpeciesRepository::new(db);
    let species = repo
        .create(CreateSpeciesParam {
            franchise: MonsterTable::Digimon,
            name: "Agumon".to_string(),
            types: vec!["Fire".to_string(), "Dragon".to_string()],
            attribute: Some("Vaccine".to_string()),
            rank: Some("Rookie".to_string()),
            stage: None,
            is_legendary: false,
            is_mythical: false,
            evolves_from: None,
            evolves_to: Some("Greymon".to_string()),
            breeding_results: vec!["Agumon".to_string(), "Koromon".to_string()],
        })
        .await?;

    assert_eq!(species.franchise, MonsterTable::Digimon);
    assert_eq!(species.types, vec!["Fire", "Dragon"]);
    assert_eq!(species.breeding_results, vec!["Agumon", "Koromon"]);
    assert_eq!(species.rank.as_deref(), Some("Rookie"));

    Ok(())
}
