use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug, Default, ToSchema)]
pub struct StatBlockDto {
    pub hp: i32,
    pub atk: i32,
    pub def: i32,
    pub spa: i32,
    pub spd: i32,
    pub spe: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MonsterDto {
    pub id: i32,
    pub trainer_id: i32,
    pub player_user_id: String,
    pub name: String,
    pub species: Vec<String>,
    pub types: Vec<String>,
    pub attribute: Option<String>,
    pub level: i32,
    pub stats: StatBlockDto,
    pub ivs: StatBlockDto,
    pub evs: StatBlockDto,
    pub nature: String,
    pub characteristic: String,
    pub gender: String,
    pub friendship: i32,
    pub abilities: Vec<String>,
    pub moveset: Vec<String>,
    pub where_met: String,
    pub img_link: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateMonsterDto {
    pub trainer_id: i32,
    pub player_user_id: String,
    pub name: String,
    pub species: Vec<String>,
    pub types: Vec<String>,
    pub attribute: Option<String>,
    #[serde(default = "default_level")]
    pub level: i32,
    pub where_met: Option<String>,
    pub img_link: Option<String>,
}

fn default_level() -> i32 {
    1
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AddLevelsDto {
    pub levels: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LevelUpDto {
    pub monster: MonsterDto,
    pub old_level: i32,
    pub new_level: i32,
    pub learned_moves: Vec<String>,
    pub messages: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RenameMonsterDto {
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AddParentsDto {
    pub parent_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LineageDto {
    pub monster_id: i32,
    pub parents: Vec<MonsterDto>,
    pub children: Vec<MonsterDto>,
}
