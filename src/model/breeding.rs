use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{monster::MonsterDto, roll::RolledMonsterDto};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EligibilityDto {
    pub monster_id: i32,
    pub eligible: bool,
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BreedDto {
    pub player_user_id: String,
    pub trainer_id: i32,
    pub parent1_id: i32,
    pub parent2_id: i32,
    /// Item name to quantity.
    #[serde(default)]
    pub extra_items: HashMap<String, u32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BreedingSessionDto {
    pub id: i32,
    pub player_user_id: String,
    pub trainer_id: i32,
    pub parent1_id: i32,
    pub parent2_id: i32,
    pub extra_items: HashMap<String, u32>,
    pub offspring: Vec<RolledMonsterDto>,
    pub claimed: Vec<usize>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClaimOffspringDto {
    pub player_user_id: String,
    pub index: usize,
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OffspringClaimDto {
    pub monster: MonsterDto,
    pub session: BreedingSessionDto,
}
