//! Encounter factory for wild and battle encounters with monster groups.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Inserts one monster group for an encounter.
///
/// # Arguments
/// - `db` - Database connection
/// - `encounter_id` - Owning encounter
/// - `position` - Zero-based group position
/// - `species` - Species names for the group
/// - `types` - Types for the group
/// - `count` - Number of monsters in the group
/// - `level` - Level of every monster in the group
pub async fn create_group(
    db: &DatabaseConnection,
    encounter_id: i32,
    position: i32,
    species: &[&str],
    types: &[&str],
    count: i32,
    level: i32,
) -> Result<entity::encounter_group::Model, DbErr> {
    entity::encounter_group::ActiveModel {
        id: ActiveValue::NotSet,
        encounter_id: ActiveValue::Set(encounter_id),
        position: ActiveValue::Set(position),
        species: ActiveValue::Set(json!(species)),
        types: ActiveValue::Set(json!(types)),
        attribute: ActiveValue::Set(None),
        count: ActiveValue::Set(count),
        level: ActiveValue::Set(level),
        agro: ActiveValue::Set(25),
        activity: ActiveValue::Set("foraging".to_string()),
    }
    .insert(db)
    .await
}

async fn create_encounter(
    db: &DatabaseConnection,
    kind: &str,
    npc_trainers: &[&str],
) -> Result<entity::encounter::Model, DbErr> {
    entity::encounter::ActiveModel {
        id: ActiveValue::NotSet,
        kind: ActiveValue::Set(kind.to_string()),
        auto_battle: ActiveValue::Set(false),
        npc_trainers: ActiveValue::Set(json!(npc_trainers
            .iter()
            .map(|name| json!({ "name": name, "level": 20 }))
            .collect::<Vec<_>>())),
        item: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Creates a wild encounter with a single group of `count` level 10 Pikachu.
pub async fn create_wild_encounter(
    db: &DatabaseConnection,
    count: i32,
) -> Result<(entity::encounter::Model, entity::encounter_group::Model), DbErr> {
    create_wild_encounter_at_level(db, count, 10).await
}

/// Creates a wild encounter with a single group of `count` Pikachu at `level`.
pub async fn create_wild_encounter_at_level(
    db: &DatabaseConnection,
    count: i32,
    level: i32,
) -> Result<(entity::encounter::Model, entity::encounter_group::Model), DbErr> {
    let encounter = create_encounter(db, "wild", &[]).await?;
    let group =
        create_group(db, encounter.id, 0, &["Pikachu"], &["Electric"], count, level).await?;

    Ok((encounter, group))
}

/// Creates a battle encounter with the given NPC trainers and one group per
/// entry in `levels`.
pub async fn create_battle_encounter(
    db: &DatabaseConnection,
    npc_trainers: &[&str],
    levels: &[i32],
) -> Result<entity::encounter::Model, DbErr> {
    let encounter = create_encounter(db, "battle", npc_trainers).await?;
    for (i, level) in levels.iter().enumerate() {
        create_group(
            db,
            encounter.id,
            i as i32,
            &["Rattata"],
            &["Normal"],
            1,
            *level,
        )
        .await?;
    }

    Ok(encounter)
}
