//! Battle data repositories.
//!
//! `BattleRepository` owns the battle row and loads a full [`BattleState`].
//! Participants, battle monsters, recorded turns and log lines each have their
//! own repository in the submodules.

pub mod log;
pub mod monster;
pub mod participant;
pub mod turn;

#[cfg(test)]
mod test;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter,
};

use crate::server::{
    data::battle::{
        log::BattleLogRepository, monster::BattleMonsterRepository,
        participant::ParticipantRepository,
    },
    engine::damage::{Terrain, Weather},
    model::battle::{Battle, BattleState, BattleStatus, BattleType, Winner, RECENT_LOG_LINES},
};

/// Repository providing database operations for battles.
pub struct BattleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BattleRepository<'a> {
    /// Creates a new BattleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BattleRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an active battle on turn 1 with clear weather and normal terrain.
    ///
    /// # Arguments
    /// - `encounter_id` - Encounter the battle was started from, if any
    /// - `battle_type` - Wild, trainer or PvP
    /// - `knockout_limit` - Fainted monsters on one side that end the battle
    ///
    /// # Returns
    /// - `Ok(Battle)` - The created battle
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        encounter_id: Option<i32>,
        battle_type: BattleType,
        knockout_limit: i32,
    ) -> Result<Battle, DbErr> {
        let entity = entity::battle::ActiveModel {
            encounter_id: ActiveValue::Set(encounter_id),
            battle_type: ActiveValue::Set(battle_type.as_str().to_string()),
            status: ActiveValue::Set(BattleStatus::Active.as_str().to_string()),
            current_turn: ActiveValue::Set(1),
            current_participant_index: ActiveValue::Set(0),
            weather: ActiveValue::Set(Weather::default().as_str().to_string()),
            terrain: ActiveValue::Set(Terrain::default().as_str().to_string()),
            knockout_limit: ActiveValue::Set(knockout_limit),
            winner_type: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ended_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Battle::from_entity(entity)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Battle>, DbErr> {
        entity::prelude::Battle::find_by_id(id)
            .one(self.db)
            .await?
            .map(Battle::from_entity)
            .transpose()
    }

    /// Loads a battle with its participants, monsters and most recent log lines.
    ///
    /// # Returns
    /// - `Ok(Some(BattleState))` - The battle and everything in it
    /// - `Ok(None)` - No battle with that ID
    /// - `Err(DbErr)` - Database error or malformed stored values
    pub async fn state(&self, id: i32) -> Result<Option<BattleState>, DbErr> {
        let Some(battle) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let participants = ParticipantRepository::new(self.db).get_by_battle(id).await?;
        let monsters = BattleMonsterRepository::new(self.db).get_by_battle(id).await?;
        let recent_logs = BattleLogRepository::new(self.db)
            .recent(id, RECENT_LOG_LINES)
            .await?;

        Ok(Some(BattleState {
            battle,
            participants,
            monsters,
            recent_logs,
        }))
    }

    /// Moves the turn pointer.
    pub async fn set_turn(&self, id: i32, participant_index: i32, turn: i32) -> Result<(), DbErr> {
        entity::prelude::Battle::update_many()
            .filter(entity::battle::Column::Id.eq(id))
            .col_expr(
                entity::battle::Column::CurrentParticipantIndex,
                Expr::value(participant_index),
            )
            .col_expr(entity::battle::Column::CurrentTurn, Expr::value(turn))
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn set_weather(&self, id: i32, weather: Weather) -> Result<(), DbErr> {
        entity::prelude::Battle::update_many()
            .filter(entity::battle::Column::Id.eq(id))
            .col_expr(entity::battle::Column::Weather, Expr::value(weather.as_str()))
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn set_terrain(&self, id: i32, terrain: Terrain) -> Result<(), DbErr> {
        entity::prelude::Battle::update_many()
            .filter(entity::battle::Column::Id.eq(id))
            .col_expr(entity::battle::Column::Terrain, Expr::value(terrain.as_str()))
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn set_knockout_limit(&self, id: i32, knockout_limit: i32) -> Result<(), DbErr> {
        entity::prelude::Battle::update_many()
            .filter(entity::battle::Column::Id.eq(id))
            .col_expr(entity::battle::Column::KnockoutLimit, Expr::value(knockout_limit))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Marks a battle completed with the given winner.
    ///
    /// # Returns
    /// - `Ok(Battle)` - The completed battle
    /// - `Err(DbErr::RecordNotFound)` - No battle with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn complete(&self, id: i32, winner: Winner) -> Result<Battle, DbErr> {
        let battle = entity::prelude::Battle::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Battle {} not found", id)))?;

        let mut active_model: entity::battle::ActiveModel = battle.into();
        active_model.status = ActiveValue::Set(BattleStatus::Completed.as_str().to_string());
        active_model.winner_type = ActiveValue::Set(Some(winner.as_str().to_string()));
        active_model.ended_at = ActiveValue::Set(Some(Utc::now()));

        let updated = active_model.update(self.db).await?;

        Battle::from_entity(updated)
    }
}
