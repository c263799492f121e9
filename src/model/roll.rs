use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Include/exclude lists for a single type slot.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct SlotFilter {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

/// Per-franchise overrides of the global roll filters.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct TableFilter {
    pub include_ranks: Vec<String>,
    pub include_stages: Vec<String>,
    pub legendary: Option<bool>,
    pub mythical: Option<bool>,
}

/// Filters and shape constraints for rolling monsters.
///
/// Empty lists and `None` values mean "no constraint".
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct RollParams {
    /// Franchises to roll from. Empty means every franchise the user has enabled.
    pub tables: Vec<String>,
    /// Overrides keyed by franchise name.
    pub table_filters: HashMap<String, TableFilter>,
    pub include_species: Vec<String>,
    pub exclude_species: Vec<String>,
    /// Filters for type1 through type5, by position.
    pub type_slots: Vec<SlotFilter>,
    /// At least one of the species' types must be listed.
    pub include_types: Vec<String>,
    /// None of the species' types may be listed.
    pub exclude_types: Vec<String>,
    pub include_attributes: Vec<String>,
    pub exclude_attributes: Vec<String>,
    pub legendary: Option<bool>,
    pub mythical: Option<bool>,
    pub include_ranks: Vec<String>,
    pub exclude_ranks: Vec<String>,
    pub stage: Option<String>,
    pub include_stages: Vec<String>,
    pub exclude_stages: Vec<String>,
    pub evolves_from: Option<String>,
    pub evolves_to: Option<String>,
    pub breeding_results: Option<String>,
    pub species_min: Option<usize>,
    pub species_max: Option<usize>,
    pub types_min: Option<usize>,
    pub types_max: Option<usize>,
    /// Types to draw the result's types from instead of the species' own.
    pub species_type_options: Vec<String>,
    /// Attributes the result may carry. Defaults to the Digimon attributes.
    pub attribute_options: Vec<String>,
    pub override_attribute: Option<String>,
    /// Explicit candidates for the first species, bypassing the catalogue filters.
    pub species_pool: Vec<String>,
}

/// A player's roller preferences.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct UserSettings {
    /// Franchise name to enabled flag. Missing franchises are enabled.
    pub franchises: HashMap<String, bool>,
    pub only_legendary: bool,
    pub only_mythical: bool,
}

/// A rolled but not yet created monster.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RolledMonsterDto {
    pub species: Vec<String>,
    pub types: Vec<String>,
    pub attribute: Option<String>,
    pub franchise: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RollRequestDto {
    #[serde(default)]
    pub params: RollParams,
    #[serde(default)]
    pub settings: UserSettings,
    #[serde(default = "default_count")]
    pub count: u32,
    pub seed: Option<String>,
}

fn default_count() -> u32 {
    1
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RollResponseDto {
    pub seed: String,
    pub monsters: Vec<RolledMonsterDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CatalogueOptionsDto {
    pub species: Vec<String>,
    pub types: Vec<String>,
    pub attributes: Vec<String>,
    pub ranks: Vec<String>,
    pub stages: Vec<String>,
}
