//! Monthly boss domain models.

use chrono::{DateTime, Datelike, Utc};

use crate::{
    model::boss::{
        BossDamageResultDto, BossDto, BossRewardClaimDto, BossRewardResultDto, BossStatsDto,
        CreateBossDto, LeaderboardEntryDto,
    },
    server::model::monster::Monster,
};

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_DEFEATED: &str = "defeated";

/// Reward given to the top damage dealer.
pub const TOP_REWARD: &str = "reward_monster";
/// Reward given to everyone else who dealt damage.
pub const GRUNT_REWARD: &str = "grunt_monster";

#[derive(Debug, Clone, PartialEq)]
pub struct Boss {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub total_hp: i32,
    pub current_hp: i32,
    pub month: i32,
    pub year: i32,
    pub status: String,
    pub start_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Boss {
    pub fn from_entity(entity: entity::boss::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            image_url: entity.image_url,
            total_hp: entity.total_hp,
            current_hp: entity.current_hp,
            month: entity.month,
            year: entity.year,
            status: entity.status,
            start_date: entity.start_date,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> BossDto {
        BossDto {
            id: self.id,
            name: self.name,
            description: self.description,
            image_url: self.image_url,
            total_hp: self.total_hp,
            current_hp: self.current_hp,
            month: self.month,
            year: self.year,
            status: self.status,
            start_date: self.start_date,
            created_at: self.created_at,
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.status == STATUS_DEFEATED
    }
}

#[derive(Debug, Clone)]
pub struct CreateBossParam {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub total_hp: i32,
    pub month: i32,
    pub year: i32,
}

impl CreateBossParam {
    /// Converts the request DTO, defaulting the month and year to `now`.
    pub fn from_dto(dto: CreateBossDto, now: DateTime<Utc>) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            image_url: dto.image_url,
            total_hp: dto.total_hp,
            month: dto.month.unwrap_or(now.month() as i32),
            year: dto.year.unwrap_or(now.year()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BossDamageResult {
    pub boss: Boss,
    pub damage_dealt: i32,
    pub defeated: bool,
}

impl BossDamageResult {
    pub fn into_dto(self) -> BossDamageResultDto {
        BossDamageResultDto {
            boss: self.boss.into_dto(),
            damage_dealt: self.damage_dealt,
            defeated: self.defeated,
        }
    }
}

/// One player's summed damage against a boss.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub rank: i32,
    pub player_user_id: String,
    pub total_damage: i32,
    pub submission_count: i32,
}

impl LeaderboardEntry {
    pub fn into_dto(self) -> LeaderboardEntryDto {
        LeaderboardEntryDto {
            rank: self.rank,
            player_user_id: self.player_user_id,
            total_damage: self.total_damage,
            submission_count: self.submission_count,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BossStats {
    pub boss: Boss,
    pub total_damage: i32,
    pub participant_count: i32,
    pub player_damage: Option<i32>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl BossStats {
    pub fn into_dto(self) -> BossStatsDto {
        BossStatsDto {
            boss: self.boss.into_dto(),
            total_damage: self.total_damage,
            participant_count: self.participant_count,
            player_damage: self.player_damage,
            leaderboard: self
                .leaderboard
                .into_iter()
                .map(LeaderboardEntry::into_dto)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BossRewardClaim {
    pub id: i32,
    pub boss_id: i32,
    pub player_user_id: String,
    pub reward_type: String,
    pub damage_dealt: i32,
    pub rank_position: i32,
    pub is_claimed: bool,
    pub claimed_at: Option<DateTime<Utc>>,
    pub monster_name: Option<String>,
    pub assigned_trainer_id: Option<i32>,
}

impl BossRewardClaim {
    pub fn from_entity(entity: entity::boss_reward_claim::Model) -> Self {
        Self {
            id: entity.id,
            boss_id: entity.boss_id,
            player_user_id: entity.player_user_id,
            reward_type: entity.reward_type,
            damage_dealt: entity.damage_dealt,
            rank_position: entity.rank_position,
            is_claimed: entity.is_claimed,
            claimed_at: entity.claimed_at,
            monster_name: entity.monster_name,
            assigned_trainer_id: entity.assigned_trainer_id,
        }
    }

    pub fn into_dto(self) -> BossRewardClaimDto {
        BossRewardClaimDto {
            id: self.id,
            boss_id: self.boss_id,
            player_user_id: self.player_user_id,
            reward_type: self.reward_type,
            damage_dealt: self.damage_dealt,
            rank_position: self.rank_position,
            is_claimed: self.is_claimed,
            claimed_at: self.claimed_at,
            monster_name: self.monster_name,
            assigned_trainer_id: self.assigned_trainer_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BossRewardResult {
    pub claim: BossRewardClaim,
    pub monster: Monster,
}

impl BossRewardResult {
    pub fn into_dto(self) -> BossRewardResultDto {
        BossRewardResultDto {
            claim: self.claim.into_dto(),
            monster: self.monster.into_dto(),
        }
    }
}
