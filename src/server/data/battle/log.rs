use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QuerySelect, QueryOrder,
};

use crate::server::model::battle::{BattleLog, LogType};

/// Repository for the narrated battle log.
pub struct BattleLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BattleLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a line to a battle's log.
    ///
    /// # Arguments
    /// - `battle_id` - Battle being narrated
    /// - `participant_id` - Participant who acted, `None` for system lines
    /// - `turn_number` - Turn the line belongs to
    /// - `log_type` - System or action line
    /// - `message` - Text of the line
    pub async fn create(
        &self,
        battle_id: i32,
        participant_id: Option<i32>,
        turn_number: i32,
        log_type: LogType,
        message: String,
    ) -> Result<BattleLog, DbErr> {
        let entity = entity::battle_log::ActiveModel {
            battle_id: ActiveValue::Set(battle_id),
            participant_id: ActiveValue::Set(participant_id),
            turn_number: ActiveValue::Set(turn_number),
            log_type: ActiveValue::Set(log_type.as_str().to_string()),
            message: ActiveValue::Set(message),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(BattleLog::from_entity(entity))
    }

    /// Gets the last `limit` lines of a battle's log, oldest first.
    pub async fn recent(&self, battle_id: i32, limit: u64) -> Result<Vec<BattleLog>, DbErr> {
        let mut entities = entity::prelude::BattleLog::find()
            .filter(entity::battle_log::Column::BattleId.eq(battle_id))
            .order_by_desc(entity::battle_log::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;
        entities.reverse();

        Ok(entities.into_iter().map(BattleLog::from_entity).collect())
    }
}
