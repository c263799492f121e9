//! Rolled monster domain model.
//!
//! Roll filters and settings are used as-is from their wire types in
//! `crate::model::roll`, since hatch sessions persist them verbatim.

use crate::model::roll::{CatalogueOptionsDto, RollResponseDto, RolledMonsterDto};

/// Species, types and attribute produced by the roller, breeding or hatching,
/// before a monster is created from them.
#[derive(Debug, Clone, PartialEq)]
pub struct RolledMonster {
    pub species: Vec<String>,
    pub types: Vec<String>,
    pub attribute: Option<String>,
    pub franchise: Option<String>,
}

impl RolledMonster {
    pub fn from_dto(dto: RolledMonsterDto) -> Self {
        Self {
            species: dto.species,
            types: dto.types,
            attribute: dto.attribute,
            franchise: dto.franchise,
        }
    }

    pub fn into_dto(self) -> RolledMonsterDto {
        RolledMonsterDto {
            species: self.species,
            types: self.types,
            attribute: self.attribute,
            franchise: self.franchise,
        }
    }

    /// Display name made of the species joined with `/`.
    pub fn display_name(&self) -> String {
        self.species.join("/")
    }
}

/// Monsters rolled from one seed.
#[derive(Debug, Clone)]
pub struct RollResult {
    pub seed: String,
    pub monsters: Vec<RolledMonster>,
}

impl RollResult {
    pub fn into_dto(self) -> RollResponseDto {
        RollResponseDto {
            seed: self.seed,
            monsters: self.monsters.into_iter().map(RolledMonster::into_dto).collect(),
        }
    }
}

/// Distinct values found in the catalogue, for filling roll filters.
#[derive(Debug, Clone)]
pub struct CatalogueOptions {
    pub species: Vec<String>,
    pub types: Vec<String>,
    pub attributes: Vec<String>,
    pub ranks: Vec<String>,
    pub stages: Vec<String>,
}

impl CatalogueOptions {
    pub fn into_dto(self) -> CatalogueOptionsDto {
        CatalogueOptionsDto {
            species: self.species,
            types: self.types,
            attributes: self.attributes,
            ranks: self.ranks,
            stages: self.stages,
        }
    }
}
