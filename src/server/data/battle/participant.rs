use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::battle::{NewParticipant, Participant};

pub struct ParticipantRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParticipantRepository<'a> {
    /// Creates a new ParticipantRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ParticipantRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds an active participant with no messages yet.
    pub async fn create(&self, param: NewParticipant) -> Result<Participant, DbErr> {
        let entity = entity::battle_participant::ActiveModel {
            battle_id: ActiveValue::Set(param.battle_id),
            participant_type: ActiveValue::Set(param.kind.as_str().to_string()),
            team_side: ActiveValue::Set(param.side.as_str().to_string()),
            trainer_id: ActiveValue::Set(param.trainer_id),
            player_user_id: ActiveValue::Set(param.player_user_id),
            trainer_name: ActiveValue::Set(param.trainer_name),
            turn_order: ActiveValue::Set(param.turn_order),
            is_active: ActiveValue::Set(true),
            message_count: ActiveValue::Set(0),
            word_count: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Participant::from_entity(entity)
    }

    /// Gets a battle's participants in turn order.
    pub async fn get_by_battle(&self, battle_id: i32) -> Result<Vec<Participant>, DbErr> {
        entity::prelude::BattleParticipant::find()
            .filter(entity::battle_participant::Column::BattleId.eq(battle_id))
            .order_by_asc(entity::battle_participant::Column::TurnOrder)
            .order_by_asc(entity::battle_participant::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Participant::from_entity)
            .collect()
    }

    pub async fn count(&self, battle_id: i32) -> Result<u64, DbErr> {
        entity::prelude::BattleParticipant::find()
            .filter(entity::battle_participant::Column::BattleId.eq(battle_id))
            .count(self.db)
            .await
    }

    /// Counts one more message of `words` words for a participant.
    ///
    /// # Returns
    /// - `Ok(Participant)` - The participant with updated counters
    /// - `Err(DbErr::RecordNotFound)` - No participant with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn add_message(&self, id: i32, words: i32) -> Result<Participant, DbErr> {
        let participant = entity::prelude::BattleParticipant::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Participant {} not found", id)))?;

        let message_count = participant.message_count;
        let word_count = participant.word_count;
        let mut active_model: entity::battle_participant::ActiveModel = participant.into();
        active_model.message_count = ActiveValue::Set(message_count + 1);
        active_model.word_count = ActiveValue::Set(word_count + words);

        let updated = active_model.update(self.db).await?;

        Participant::from_entity(updated)
    }
}
