use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    monster::MonsterDto,
    roll::{RollParams, UserSettings},
};

/// Where an encounter happens: roll filters plus level and agro ranges.
///
/// Unset ranges fall back to levels 5-25 and agro 10-60.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct EncounterLocation {
    pub roll: RollParams,
    pub level_min: Option<i32>,
    pub level_max: Option<i32>,
    pub agro_min: Option<i32>,
    pub agro_max: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct GenerateEncounterDto {
    /// Forces `wild`, `battle` or `item` instead of a weighted roll.
    pub kind: Option<String>,
    pub location: EncounterLocation,
    pub settings: UserSettings,
    pub seed: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct NpcTrainerDto {
    pub name: String,
    pub level: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EncounterItemDto {
    pub category: String,
    pub name: String,
    pub quantity: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EncounterGroupDto {
    pub id: i32,
    pub position: i32,
    pub species: Vec<String>,
    pub types: Vec<String>,
    pub attribute: Option<String>,
    pub count: i32,
    pub level: i32,
    pub agro: i32,
    pub activity: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EncounterDto {
    pub id: i32,
    pub kind: String,
    pub auto_battle: bool,
    pub npc_trainers: Vec<NpcTrainerDto>,
    pub groups: Vec<EncounterGroupDto>,
    pub item: Option<EncounterItemDto>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CaptureDto {
    pub player_user_id: String,
    /// Matched case-insensitively against the player's trainers.
    pub trainer_name: String,
    pub ball: String,
    /// 1-based position of the group in the encounter.
    pub group_index: usize,
    #[serde(default)]
    pub pokepuffs: u32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CaptureResultDto {
    pub success: bool,
    pub chance: f64,
    pub ball: String,
    /// Monsters the player can still capture from the group.
    pub remaining: i32,
    pub monster: Option<MonsterDto>,
    pub message: String,
}
