use super::*;

fn param(name: &str, category: &str) -> CreateMoveParam {
    CreateMoveParam {
        name: name.to_string(),
        move_type: "Electric".to_string(),
        category: category.to_string(),
        power: Some(90),
        accuracy: Some(100),
        description: None,
        effect_chance: Some(10),
        attribute: None,
    }
}

/// Tests that the category is stored in its canonical spelling.
///
/// Expected: Ok with category "Special"
#[tokio::test]
async fn normalizes_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CatalogueService::new(db);
    let created = service.create_move(param("Thunderbolt", "special")).await?;

    assert_eq!(created.category, "Special");
    assert_eq!(service.get_move("thunderbolt").await?.name, "Thunderbolt");

    Ok(())
}

/// Tests that a duplicate move name is rejected regardless of case.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_duplicate_move() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_move(db, "Thunderbolt", "Electric", "Special", Some(90)).await?;

    let service = CatalogueService::new(db);
    let result = service.create_move(param("THUNDERBOLT", "Special")).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that an unknown category is rejected.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_unknown_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CatalogueService::new(db);
    let result = service.create_move(param("Zap", "Magic")).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
