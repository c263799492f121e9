use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use serde_json::json;

use crate::{
    model::nursery::HatchClaimDto,
    server::{
        engine::hatcher::HatchedEgg,
        model::nursery::{HatchSession, NewHatchSession},
    },
};

/// Repository for hatch sessions waiting to be claimed.
pub struct HatchSessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HatchSessionRepository<'a> {
    /// Creates a new HatchSessionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `HatchSessionRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores hatched eggs together with the parameters that produced them.
    pub async fn create(&self, param: NewHatchSession) -> Result<HatchSession, DbErr> {
        let entity = entity::hatch_session::ActiveModel {
            player_user_id: ActiveValue::Set(param.player_user_id),
            trainer_id: ActiveValue::Set(param.trainer_id),
            params: ActiveValue::Set(json!(param.params)),
            eggs: ActiveValue::Set(HatchSession::eggs_json(&param.eggs)),
            claimed: ActiveValue::Set(json!([])),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        HatchSession::from_entity(entity)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<HatchSession>, DbErr> {
        entity::prelude::HatchSession::find_by_id(id)
            .one(self.db)
            .await?
            .map(HatchSession::from_entity)
            .transpose()
    }

    /// Overwrites the eggs and claims of a session.
    ///
    /// # Returns
    /// - `Ok(HatchSession)` - The updated session
    /// - `Err(DbErr::RecordNotFound)` - No session with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        eggs: &[HatchedEgg],
        claimed: &[HatchClaimDto],
    ) -> Result<HatchSession, DbErr> {
        let session = entity::prelude::HatchSession::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Hatch session {} not found",
                id
            )))?;

        let mut active_model: entity::hatch_session::ActiveModel = session.into();
        active_model.eggs = ActiveValue::Set(HatchSession::eggs_json(eggs));
        active_model.claimed = ActiveValue::Set(json!(claimed));

        let updated = active_model.update(self.db).await?;

        HatchSession::from_entity(updated)
    }

    /// Deletes sessions created before `cutoff`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of sessions deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::HatchSession::delete_many()
            .filter(entity::hatch_session::Column::CreatedAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
