use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{monster::MonsterDto, roll::RolledMonsterDto};

/// Player-chosen species and types used by species and type control items.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct SpeciesInputs {
    pub species1: Option<String>,
    pub species2: Option<String>,
    pub species3: Option<String>,
    pub type1: Option<String>,
    pub type2: Option<String>,
    pub type3: Option<String>,
    pub type4: Option<String>,
    pub type5: Option<String>,
}

/// Everything needed to hatch a batch of eggs again.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct HatchParams {
    /// Item name to quantity.
    pub selected_items: HashMap<String, u32>,
    pub species_inputs: SpeciesInputs,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StartHatchDto {
    pub player_user_id: String,
    pub trainer_id: i32,
    pub egg_count: u32,
    #[serde(default)]
    pub use_incubator: bool,
    pub image_url: Option<String>,
    #[serde(default)]
    pub selected_items: HashMap<String, u32>,
    #[serde(default)]
    pub species_inputs: SpeciesInputs,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct HatchedEggDto {
    pub egg_id: u32,
    pub seed: String,
    pub monsters: Vec<RolledMonsterDto>,
}

/// A claimed option, as `(egg_id, option_index)`.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
pub struct HatchClaimDto {
    pub egg_id: u32,
    pub option_index: usize,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct HatchSessionDto {
    pub id: i32,
    pub player_user_id: String,
    pub trainer_id: i32,
    pub params: HatchParams,
    pub eggs: Vec<HatchedEggDto>,
    pub claimed: Vec<HatchClaimDto>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SelectHatchDto {
    pub player_user_id: String,
    pub egg_id: u32,
    pub option_index: usize,
    pub name: Option<String>,
    #[serde(default)]
    pub use_edenwiess: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct HatchSelectionDto {
    pub monster: MonsterDto,
    pub session: HatchSessionDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SessionOwnerDto {
    pub player_user_id: String,
}
