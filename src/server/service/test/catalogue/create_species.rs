use super::*;

fn param(name: &str, types: &[&str]) -> CreateSpeciesParam {
    CreateSpeciesParam {
        franchise: MonsterTable::Digimon,
        name: name.to_string(),
        types: types.iter().map(|t| t.to_string()).collect(),
        attribute: Some("Vaccine".to_string()),
        rank: Some("Rookie".to_string()),
        stage: None,
        is_legendary: false,
        is_mythical: false,
        evolves_from: None,
        evolves_to: None,
        breeding_results: Vec::new(),
    }
}

/// Tests creating a species with several types.
///
/// Expected: Ok with the types kept in slot order
#[tokio::test]
async fn creates_species() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CatalogueService::new(db);
    let species = service
        .create_species(param("Agumon", &["Fire", "Dragon"]))
        .await?;

    assert_eq!(species.name, "Agumon");
    assert_eq!(species.franchise, MonsterTable::Digimon);
    assert_eq!(species.types, vec!["Fire".to_string(), "Dragon".to_string()]);

    Ok(())
}

/// Tests that a species without types is rejected.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_species_without_types() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CatalogueService::new(db);
    let result = service.create_species(param("Agumon", &[])).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
