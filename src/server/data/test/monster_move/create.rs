use super::*;

/// Tests adding a move.
///
/// Expected: Ok with move created
#[tokio::test]
async fn creates_move() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MoveRepository::new(db);
    let created = repo
        .create(CreateMoveParam {
            name: "Flamethrower".to_string(),
            move_type: "Fire".to_string(),
            category: "Special".to_string(),
            power: Some(90),
            accuracy: Some(100),
            description: Some("May burn the target.".to_string()),
            effect_chance: Some(10),
            attribute: None,
        })
        .await?;

    assert_eq!(created.name, "Flamethrower");
    assert_eq!(created.power, Some(90));
    assert!(created.is_damaging());

    Ok(())
}
