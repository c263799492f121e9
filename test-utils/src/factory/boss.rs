//! Boss factory for creating active monthly bosses.

use chrono::{Datelike, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an active boss for the current month with the given HP.
pub async fn create_boss(
    db: &DatabaseConnection,
    name: &str,
    total_hp: i32,
) -> Result<entity::boss::Model, DbErr> {
    let now = Utc::now();
    entity::boss::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(name.to_string()),
        description: ActiveValue::Set(None),
        image_url: ActiveValue::Set(None),
        total_hp: ActiveValue::Set(total_hp),
        current_hp: ActiveValue::Set(total_hp),
        month: ActiveValue::Set(now.month() as i32),
        year: ActiveValue::Set(now.year()),
        status: ActiveValue::Set("active".to_string()),
        start_date: ActiveValue::Set(now),
        created_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
