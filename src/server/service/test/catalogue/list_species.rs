use super::*;

/// Tests filtering species by franchise.
///
/// Expected: Ok with only the digimon species
#[tokio::test]
async fn filters_by_franchise() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_species(db, "Pikachu", &["Electric"]).await?;
    SpeciesFactory::new(db, "Agumon")
        .franchise("digimon")
        .types(&["Fire"])
        .build()
        .await?;

    let service = CatalogueService::new(db);
    let digimon = service.list_species(Some("Digimon")).await?;
    let all = service.list_species(None).await?;

    assert_eq!(digimon.len(), 1);
    assert_eq!(digimon[0].name, "Agumon");
    assert_eq!(all.len(), 2);

    Ok(())
}

/// Tests that an unknown franchise is rejected.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_unknown_franchise() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CatalogueService::new(db);
    let result = service.list_species(Some("tamagotchi")).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
