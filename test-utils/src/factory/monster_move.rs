//! Move factory for seeding the move table in tests.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a move with the given name, type, category and power at 100 accuracy.
pub async fn create_move(
    db: &DatabaseConnection,
    name: &str,
    move_type: &str,
    category: &str,
    power: Option<i32>,
) -> Result<entity::monster_move::Model, DbErr> {
    entity::monster_move::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(name.to_string()),
        move_type: ActiveValue::Set(move_type.to_string()),
        category: ActiveValue::Set(category.to_string()),
        power: ActiveValue::Set(power),
        accuracy: ActiveValue::Set(Some(100)),
        description: ActiveValue::Set(None),
        effect_chance: ActiveValue::Set(None),
        attribute: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}

/// Creates a status move whose description names an effect.
pub async fn create_status_move(
    db: &DatabaseConnection,
    name: &str,
    move_type: &str,
    description: &str,
) -> Result<entity::monster_move::Model, DbErr> {
    entity::monster_move::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(name.to_string()),
        move_type: ActiveValue::Set(move_type.to_string()),
        category: ActiveValue::Set("Status".to_string()),
        power: ActiveValue::Set(None),
        accuracy: ActiveValue::Set(Some(100)),
        description: ActiveValue::Set(Some(description.to_string())),
        effect_chance: ActiveValue::Set(Some(100)),
        attribute: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}
