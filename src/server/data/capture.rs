use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Repository recording which player captured what from an encounter group.
pub struct CaptureRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CaptureRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a successful capture.
    ///
    /// # Arguments
    /// - `encounter_id` - Encounter the group belongs to
    /// - `group_id` - Group the monster was captured from
    /// - `player_user_id` - Capturing player
    /// - `monster_id` - Monster created by the capture
    pub async fn create(
        &self,
        encounter_id: i32,
        group_id: i32,
        player_user_id: &str,
        monster_id: i32,
    ) -> Result<(), DbErr> {
        entity::encounter_capture::ActiveModel {
            encounter_id: ActiveValue::Set(encounter_id),
            group_id: ActiveValue::Set(group_id),
            player_user_id: ActiveValue::Set(player_user_id.to_string()),
            monster_id: ActiveValue::Set(monster_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;
        Ok(())
    }

    /// Counts a player's captures from one group.
    pub async fn count_for_player(&self, group_id: i32, player_user_id: &str) -> Result<u64, DbErr> {
        entity::prelude::EncounterCapture::find()
            .filter(entity::encounter_capture::Column::GroupId.eq(group_id))
            .filter(entity::encounter_capture::Column::PlayerUserId.eq(player_user_id))
            .count(self.db)
            .await
    }
}
