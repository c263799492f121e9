use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SpeciesDto {
    pub id: i32,
    pub franchise: String,
    pub name: String,
    pub types: Vec<String>,
    pub attribute: Option<String>,
    pub rank: Option<String>,
    pub stage: Option<String>,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub evolves_from: Option<String>,
    pub evolves_to: Option<String>,
    pub breeding_results: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateSpeciesDto {
    pub franchise: String,
    pub name: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub attribute: Option<String>,
    pub rank: Option<String>,
    pub stage: Option<String>,
    #[serde(default)]
    pub is_legendary: bool,
    #[serde(default)]
    pub is_mythical: bool,
    pub evolves_from: Option<String>,
    pub evolves_to: Option<String>,
    #[serde(default)]
    pub breeding_results: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MoveDto {
    pub id: i32,
    pub name: String,
    pub move_type: String,
    pub category: String,
    pub power: Option<i32>,
    pub accuracy: Option<i32>,
    pub description: Option<String>,
    pub effect_chance: Option<i32>,
    pub attribute: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateMoveDto {
    pub name: String,
    pub move_type: String,
    pub category: String,
    pub power: Option<i32>,
    pub accuracy: Option<i32>,
    pub description: Option<String>,
    pub effect_chance: Option<i32>,
    pub attribute: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AbilityDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateAbilityDto {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SpeciesQueryDto {
    pub franchise: Option<String>,
}
