use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::boss::{BossRewardClaim, LeaderboardEntry, GRUNT_REWARD, TOP_REWARD};

/// Repository for rewards handed out when a boss is defeated.
pub struct BossRewardClaimRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BossRewardClaimRepository<'a, C> {
    /// Creates a new BossRewardClaimRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BossRewardClaimRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates one unclaimed reward per leaderboard entry. Rank 1 receives the
    /// top reward, everyone else the grunt reward.
    pub async fn create_for_leaderboard(
        &self,
        boss_id: i32,
        leaderboard: &[LeaderboardEntry],
    ) -> Result<Vec<BossRewardClaim>, DbErr> {
        let mut claims = Vec::with_capacity(leaderboard.len());

        for entry in leaderboard {
            let reward_type = if entry.rank == 1 {
                TOP_REWARD
            } else {
                GRUNT_REWARD
            };

            let claim = entity::boss_reward_claim::ActiveModel {
                boss_id: ActiveValue::Set(boss_id),
                player_user_id: ActiveValue::Set(entry.player_user_id.clone()),
                reward_type: ActiveValue::Set(reward_type.to_string()),
                damage_dealt: ActiveValue::Set(entry.total_damage),
                rank_position: ActiveValue::Set(entry.rank),
                is_claimed: ActiveValue::Set(false),
                claimed_at: ActiveValue::Set(None),
                monster_name: ActiveValue::Set(None),
                assigned_trainer_id: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            claims.push(BossRewardClaim::from_entity(claim));
        }

        Ok(claims)
    }

    /// Gets a player's reward for one boss.
    pub async fn get(
        &self,
        boss_id: i32,
        player_user_id: &str,
    ) -> Result<Option<BossRewardClaim>, DbErr> {
        let entity = entity::prelude::BossRewardClaim::find()
            .filter(entity::boss_reward_claim::Column::BossId.eq(boss_id))
            .filter(entity::boss_reward_claim::Column::PlayerUserId.eq(player_user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(BossRewardClaim::from_entity))
    }

    /// Lists a player's rewards that have not been claimed yet.
    pub async fn get_unclaimed(&self, player_user_id: &str) -> Result<Vec<BossRewardClaim>, DbErr> {
        let entities = entity::prelude::BossRewardClaim::find()
            .filter(entity::boss_reward_claim::Column::PlayerUserId.eq(player_user_id))
            .filter(entity::boss_reward_claim::Column::IsClaimed.eq(false))
            .order_by_asc(entity::boss_reward_claim::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(BossRewardClaim::from_entity).collect())
    }

    /// Marks a reward claimed by the given trainer under the given monster name.
    ///
    /// # Returns
    /// - `Ok(BossRewardClaim)` - The claimed reward
    /// - `Err(DbErr::RecordNotFound)` - No reward with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_claimed(
        &self,
        id: i32,
        monster_name: String,
        trainer_id: i32,
    ) -> Result<BossRewardClaim, DbErr> {
        let claim = entity::prelude::BossRewardClaim::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Reward claim {} not found", id)))?;

        let mut active_model: entity::boss_reward_claim::ActiveModel = claim.into();
        active_model.is_claimed = ActiveValue::Set(true);
        active_model.claimed_at = ActiveValue::Set(Some(Utc::now()));
        active_model.monster_name = ActiveValue::Set(Some(monster_name));
        active_model.assigned_trainer_id = ActiveValue::Set(Some(trainer_id));

        let updated = active_model.update(self.db).await?;

        Ok(BossRewardClaim::from_entity(updated))
    }
}
