use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::server::model::battle::TurnRecord;

pub struct BattleTurnRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BattleTurnRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records one action taken in a battle.
    pub async fn create(&self, record: TurnRecord) -> Result<entity::battle_turn::Model, DbErr> {
        entity::battle_turn::ActiveModel {
            battle_id: ActiveValue::Set(record.battle_id),
            turn_number: ActiveValue::Set(record.turn_number),
            participant_id: ActiveValue::Set(record.participant_id),
            battle_monster_id: ActiveValue::Set(record.battle_monster_id),
            action_type: ActiveValue::Set(record.action_type),
            action_data: ActiveValue::Set(record.action_data),
            damage_dealt: ActiveValue::Set(record.damage_dealt),
            message: ActiveValue::Set(record.message),
            word_count: ActiveValue::Set(record.word_count),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
