use super::*;

fn group(species: &str, count: i32) -> GroupPlan {
    GroupPlan {
        species: vec![species.to_string()],
        types: vec!["Normal".to_string()],
        attribute: None,
        count,
        level: 12,
        agro: 40,
        activity: "sleeping".to_string(),
    }
}

/// Tests storing a generated battle encounter.
///
/// Verifies that groups are numbered from zero in plan order and NPC trainers
/// are kept.
///
/// Expected: Ok with encounter and groups stored
#[tokio::test]
async fn stores_groups_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_encounter_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EncounterRepository::new(db);
    let encounter = repo
        .create(EncounterPlan {
            kind: EncounterKind::Battle,
            auto_battle: false,
            npc_trainers: vec![NpcTrainer {
                name: "Bug Catcher Rick".to_string(),
                level: 18,
            }],
            groups: vec![group("Rattata", 2), group("Pidgey", 1)],
            item: None,
        })
        .await?;

    assert_eq!(encounter.kind, EncounterKind::Battle);
    assert_eq!(encounter.npc_trainers.len(), 1);
    assert_eq!(encounter.groups.len(), 2);
    assert_eq!(encounter.groups[0].position, 0);
    assert_eq!(encounter.groups[0].species, vec!["Rattata"]);
    assert_eq!(encounter.groups[1].position, 1);
    assert_eq!(encounter.groups[1].count, 1);

    Ok(())
}

/// Tests storing an item encounter.
///
/// Expected: Ok with the item kept and no groups
#[tokio::test]
async fn stores_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_encounter_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let item = EncounterItem {
        category: "items".to_string(),
        name: "Potion".to_string(),
        quantity: 1,
    };

    let repo = EncounterRepository::new(db);
    let encounter = repo
        .create(EncounterPlan {
            kind: EncounterKind::Item,
            auto_battle: false,
            npc_trainers: Vec::new(),
            groups: Vec::new(),
            item: Some(item.clone()),
        })
        .await?;

    assert_eq!(encounter.item, Some(item));
    assert!(encounter.groups.is_empty());

    let stored = repo.get_by_id(encounter.id).await?.unwrap();
    assert_eq!(stored.kind, EncounterKind::Item);

    Ok(())
}
