use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::monster::{MonsterDto, StatBlockDto};

/// Starts a battle from an encounter, or joins an existing one.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct JoinBattleDto {
    pub player_user_id: String,
    pub trainer_id: i32,
    /// Monsters to bring. Empty brings nothing until monsters are released.
    #[serde(default)]
    pub monster_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StartPvpDto {
    pub player_user_id: String,
    pub trainer_id: i32,
    #[serde(default)]
    pub monster_ids: Vec<i32>,
    pub opponent_trainer_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AttackDto {
    pub player_user_id: String,
    pub move_name: String,
    /// 1-based index or (partial) name of an opposing monster.
    pub target: Option<String>,
    /// Which of the player's active monsters attacks.
    pub attacker_name: Option<String>,
    /// The roleplay text accompanying the action.
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UseItemDto {
    pub player_user_id: String,
    pub trainer_id: i32,
    pub item_name: String,
    pub target: Option<String>,
    #[serde(default)]
    pub message: String,
}

/// Releases a monster into battle or withdraws it.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MonsterActionDto {
    pub player_user_id: String,
    pub monster_name: String,
    #[serde(default)]
    pub message: String,
}

/// Forfeit or flee.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlayerActionDto {
    pub player_user_id: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ForceEndDto {
    /// `players`, `opponents` or `draw`.
    pub winner: String,
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SetWeatherDto {
    pub weather: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SetTerrainDto {
    pub terrain: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SetWinConditionDto {
    pub knockout_limit: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BattleDto {
    pub id: i32,
    pub encounter_id: Option<i32>,
    pub battle_type: String,
    pub status: String,
    pub current_turn: i32,
    pub current_participant_index: i32,
    pub weather: String,
    pub terrain: String,
    pub knockout_limit: i32,
    pub winner_type: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub ended_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ParticipantDto {
    pub id: i32,
    pub participant_type: String,
    pub team_side: String,
    pub trainer_id: Option<i32>,
    pub player_user_id: Option<String>,
    pub trainer_name: String,
    pub turn_order: i32,
    pub is_active: bool,
    pub message_count: i32,
    pub word_count: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StatusEffectDto {
    #[serde(rename = "type")]
    pub kind: String,
    pub duration: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BattleMonsterDto {
    pub id: i32,
    pub participant_id: i32,
    pub monster_id: Option<i32>,
    pub name: String,
    pub level: i32,
    pub types: Vec<String>,
    pub attribute: Option<String>,
    pub max_hp: i32,
    pub current_hp: i32,
    pub stats: StatBlockDto,
    pub moves: Vec<String>,
    pub status_effects: Vec<StatusEffectDto>,
    pub is_active: bool,
    pub is_fainted: bool,
    pub position: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BattleLogDto {
    pub id: i32,
    pub participant_id: Option<i32>,
    pub turn_number: i32,
    pub log_type: String,
    pub message: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BattleStateDto {
    pub battle: BattleDto,
    pub participants: Vec<ParticipantDto>,
    pub monsters: Vec<BattleMonsterDto>,
    pub current_participant: Option<ParticipantDto>,
    /// The most recent log lines, oldest first.
    pub recent_logs: Vec<BattleLogDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BattleRewardDto {
    pub participant_id: i32,
    pub trainer_id: i32,
    pub experience: i32,
    pub coins: i32,
}

/// What an action did, and the battle afterwards.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ActionResultDto {
    pub messages: Vec<String>,
    pub captured: Option<MonsterDto>,
    pub rewards: Vec<BattleRewardDto>,
    pub state: BattleStateDto,
}
