use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use serde_json::json;

use crate::server::model::{
    breeding::{BreedingSession, NewBreedingSession},
    roll::RolledMonster,
};

/// Repository for breeding sessions waiting to be claimed.
pub struct BreedingSessionRepository<'a> {
    db: &'a DatabaseConnection,
}

fn offspring_json(offspring: &[RolledMonster]) -> serde_json::Value {
    json!(offspring
        .iter()
        .cloned()
        .map(RolledMonster::into_dto)
        .collect::<Vec<_>>())
}

impl<'a> BreedingSessionRepository<'a> {
    /// Creates a new BreedingSessionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BreedingSessionRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new litter with nothing claimed yet.
    pub async fn create(&self, param: NewBreedingSession) -> Result<BreedingSession, DbErr> {
        let entity = entity::breeding_session::ActiveModel {
            player_user_id: ActiveValue::Set(param.player_user_id),
            trainer_id: ActiveValue::Set(param.trainer_id),
            parent1_id: ActiveValue::Set(param.parent1_id),
            parent2_id: ActiveValue::Set(param.parent2_id),
            extra_items: ActiveValue::Set(json!(param.extra_items)),
            offspring: ActiveValue::Set(offspring_json(&param.offspring)),
            claimed: ActiveValue::Set(json!([])),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        BreedingSession::from_entity(entity)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<BreedingSession>, DbErr> {
        entity::prelude::BreedingSession::find_by_id(id)
            .one(self.db)
            .await?
            .map(BreedingSession::from_entity)
            .transpose()
    }

    /// Overwrites the offspring and claimed indices of a session.
    ///
    /// # Returns
    /// - `Ok(BreedingSession)` - The updated session
    /// - `Err(DbErr::RecordNotFound)` - No session with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        offspring: &[RolledMonster],
        claimed: &[usize],
    ) -> Result<BreedingSession, DbErr> {
        let session = entity::prelude::BreedingSession::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Breeding session {} not found",
                id
            )))?;

        let mut active_model: entity::breeding_session::ActiveModel = session.into();
        active_model.offspring = ActiveValue::Set(offspring_json(offspring));
        active_model.claimed = ActiveValue::Set(json!(claimed));

        let updated = active_model.update(self.db).await?;

        BreedingSession::from_entity(updated)
    }

    /// Deletes sessions created before `cutoff`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of sessions deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::BreedingSession::delete_many()
            .filter(entity::breeding_session::Column::CreatedAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
