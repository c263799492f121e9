use super::*;

/// Tests that the options list every species and type in the catalogue.
///
/// Expected: Ok with both species and all three types
#[tokio::test]
async fn lists_catalogue_options() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_species(db, "Pikachu", &["Electric"]).await?;
    factory::create_species(db, "Bulbasaur", &["Grass", "Poison"]).await?;

    let service = RollerService::new(db);
    let options = service.options().await?;

    assert!(options.species.contains(&"Pikachu".to_string()));
    assert!(options.species.contains(&"Bulbasaur".to_string()));
    for t in ["Electric", "Grass", "Poison"] {
        assert!(options.types.contains(&t.to_string()));
    }

    Ok(())
}
