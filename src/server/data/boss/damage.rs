use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::boss::LeaderboardEntry;

/// Repository for damage dealt to bosses.
pub struct BossDamageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BossDamageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records damage dealt by a player.
    ///
    /// # Arguments
    /// - `boss_id` - Boss that was hit
    /// - `player_user_id` - Player who dealt the damage
    /// - `amount` - Damage dealt
    /// - `submission_id` - Submission the damage came from, if any
    pub async fn create(
        &self,
        boss_id: i32,
        player_user_id: &str,
        amount: i32,
        submission_id: Option<i32>,
    ) -> Result<(), DbErr> {
        entity::boss_damage::ActiveModel {
            boss_id: ActiveValue::Set(boss_id),
            player_user_id: ActiveValue::Set(player_user_id.to_string()),
            damage_amount: ActiveValue::Set(amount),
            submission_id: ActiveValue::Set(submission_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;
        Ok(())
    }

    async fn get_by_boss(&self, boss_id: i32) -> Result<Vec<entity::boss_damage::Model>, DbErr> {
        entity::prelude::BossDamage::find()
            .filter(entity::boss_damage::Column::BossId.eq(boss_id))
            .all(self.db)
            .await
    }

    /// Damage summed per player, highest first. Ties are ordered by player ID.
    ///
    /// # Arguments
    /// - `boss_id` - Boss to rank players for
    /// - `limit` - Maximum number of entries, `None` for every player
    ///
    /// # Returns
    /// - `Ok(Vec<LeaderboardEntry>)` - Ranked entries starting at rank 1
    /// - `Err(DbErr)` - Database error during query
    pub async fn leaderboard(
        &self,
        boss_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<LeaderboardEntry>, DbErr> {
        let mut totals: HashMap<String, (i32, i32)> = HashMap::new();
        for damage in self.get_by_boss(boss_id).await? {
            let entry = totals.entry(damage.player_user_id).or_default();
            entry.0 += damage.damage_amount;
            entry.1 += 1;
        }

        let mut ranked: Vec<(String, (i32, i32))> = totals.into_iter().collect();
        ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then_with(|| a.0.cmp(&b.0)));

        let limit = limit.map(|l| l as usize).unwrap_or(ranked.len());

        Ok(ranked
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(i, (player_user_id, (total_damage, submission_count)))| LeaderboardEntry {
                rank: i as i32 + 1,
                player_user_id,
                total_damage,
                submission_count,
            })
            .collect())
    }

    pub async fn total_damage(&self, boss_id: i32) -> Result<i32, DbErr> {
        let damages = self.get_by_boss(boss_id).await?;

        Ok(damages.iter().map(|d| d.damage_amount).sum())
    }

    pub async fn player_damage(&self, boss_id: i32, player_user_id: &str) -> Result<i32, DbErr> {
        let damages = entity::prelude::BossDamage::find()
            .filter(entity::boss_damage::Column::BossId.eq(boss_id))
            .filter(entity::boss_damage::Column::PlayerUserId.eq(player_user_id))
            .all(self.db)
            .await?;

        Ok(damages.iter().map(|d| d.damage_amount).sum())
    }

    /// Number of distinct players who damaged the boss.
    pub async fn participant_count(&self, boss_id: i32) -> Result<i32, DbErr> {
        let leaderboard = self.leaderboard(boss_id, None).await?;

        Ok(leaderboard.len() as i32)
    }
}
