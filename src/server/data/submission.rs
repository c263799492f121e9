use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use serde_json::json;

use crate::server::model::submission::{Submission, SubmissionKind, SubmissionRewards};

/// Repository for applied art and writing submissions.
pub struct SubmissionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubmissionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a submission with the rewards calculated for it.
    pub async fn create(
        &self,
        player_user_id: &str,
        kind: SubmissionKind,
        title: String,
        rewards: SubmissionRewards,
    ) -> Result<Submission, DbErr> {
        let entity = entity::submission::ActiveModel {
            player_user_id: ActiveValue::Set(player_user_id.to_string()),
            kind: ActiveValue::Set(kind.as_str().to_string()),
            title: ActiveValue::Set(title),
            rewards: ActiveValue::Set(json!(rewards.into_dto())),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Submission::from_entity(entity)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Submission>, DbErr> {
        entity::prelude::Submission::find_by_id(id)
            .one(self.db)
            .await?
            .map(Submission::from_entity)
            .transpose()
    }

    /// Lists a player's submissions, newest first.
    pub async fn get_by_player(&self, player_user_id: &str) -> Result<Vec<Submission>, DbErr> {
        entity::prelude::Submission::find()
            .filter(entity::submission::Column::PlayerUserId.eq(player_user_id))
            .order_by_desc(entity::submission::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Submission::from_entity)
            .collect()
    }
}
