use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::monster::MonsterDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BossDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub total_hp: i32,
    pub current_hp: i32,
    pub month: i32,
    pub year: i32,
    pub status: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub start_date: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateBossDto {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub total_hp: i32,
    /// Defaults to the current month.
    pub month: Option<i32>,
    pub year: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AddBossDamageDto {
    pub player_user_id: String,
    pub amount: i32,
    pub submission_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BossDamageResultDto {
    pub boss: BossDto,
    pub damage_dealt: i32,
    pub defeated: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LeaderboardEntryDto {
    pub rank: i32,
    pub player_user_id: String,
    pub total_damage: i32,
    pub submission_count: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BossStatsDto {
    pub boss: BossDto,
    pub total_damage: i32,
    pub participant_count: i32,
    pub player_damage: Option<i32>,
    pub leaderboard: Vec<LeaderboardEntryDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BossRewardClaimDto {
    pub id: i32,
    pub boss_id: i32,
    pub player_user_id: String,
    pub reward_type: String,
    pub damage_dealt: i32,
    pub rank_position: i32,
    pub is_claimed: bool,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub claimed_at: Option<DateTime<Utc>>,
    pub monster_name: Option<String>,
    pub assigned_trainer_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClaimBossRewardDto {
    pub player_user_id: String,
    pub monster_name: String,
    pub trainer_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BossRewardResultDto {
    pub claim: BossRewardClaimDto,
    pub monster: MonsterDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct BossQueryDto {
    pub player_user_id: Option<String>,
    pub limit: Option<u64>,
}
