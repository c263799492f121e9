//! Domain models for the species catalogue, moves and abilities.
//!
//! Species rows from every franchise share one table. The franchise decides
//! which optional columns are meaningful, see [`MonsterTable::schema`].

use sea_orm::DbErr;

use crate::{
    model::catalogue::{
        AbilityDto, CreateAbilityDto, CreateMoveDto, CreateSpeciesDto, MoveDto, SpeciesDto,
    },
    server::engine::constants::{MonsterTable, FALLBACK_MOVE},
};

/// A catalogue species.
#[derive(Debug, Clone, PartialEq)]
pub struct Species {
    pub id: i32,
    pub franchise: MonsterTable,
    pub name: String,
    /// Up to five types, in slot order.
    pub types: Vec<String>,
    pub attribute: Option<String>,
    pub rank: Option<String>,
    pub stage: Option<String>,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub evolves_from: Option<String>,
    pub evolves_to: Option<String>,
    /// Species names this species can produce when bred.
    pub breeding_results: Vec<String>,
}

impl Species {
    /// Converts an entity model to the species domain model.
    ///
    /// # Arguments
    /// - `entity` - The species entity model from the database
    ///
    /// # Returns
    /// - `Ok(Species)` - The converted domain model
    /// - `Err(DbErr::Custom)` - The stored franchise is not a known table
    pub fn from_entity(entity: entity::species::Model) -> Result<Self, DbErr> {
        let franchise = MonsterTable::parse(&entity.franchise)
            .ok_or_else(|| DbErr::Custom(format!("Unknown franchise: {}", entity.franchise)))?;

        let types = [
            entity.type1,
            entity.type2,
            entity.type3,
            entity.type4,
            entity.type5,
        ]
        .into_iter()
        .flatten()
        .filter(|t| !t.trim().is_empty())
        .collect();

        let breeding_results = entity
            .breeding_results
            .as_deref()
            .map(split_list)
            .unwrap_or_default();

        Ok(Self {
            id: entity.id,
            franchise,
            name: entity.name,
            types,
            attribute: entity.attribute,
            rank: entity.rank,
            stage: entity.stage,
            is_legendary: entity.is_legendary,
            is_mythical: entity.is_mythical,
            evolves_from: entity.evolves_from,
            evolves_to: entity.evolves_to,
            breeding_results,
        })
    }

    pub fn into_dto(self) -> SpeciesDto {
        SpeciesDto {
            id: self.id,
            franchise: self.franchise.to_string(),
            name: self.name,
            types: self.types,
            attribute: self.attribute,
            rank: self.rank,
            stage: self.stage,
            is_legendary: self.is_legendary,
            is_mythical: self.is_mythical,
            evolves_from: self.evolves_from,
            evolves_to: self.evolves_to,
            breeding_results: self.breeding_results,
        }
    }

    /// True when the species has no further evolution.
    pub fn is_final_stage(&self) -> bool {
        let final_stage = self
            .stage
            .as_deref()
            .map(|s| s.contains("Final") || s == "Doesn't Evolve")
            .unwrap_or(false);
        let no_evolution = self
            .evolves_to
            .as_deref()
            .map(|s| s.trim().is_empty())
            .unwrap_or(true);

        final_stage || no_evolution
    }
}

/// Splits a comma separated list, dropping empty entries.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parameters for creating a catalogue species.
#[derive(Debug, Clone)]
pub struct CreateSpeciesParam {
    pub franchise: MonsterTable,
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

impl CreateSpeciesParam {
    /// Converts the request DTO, returning `None` for an unknown franchise.
    pub fn from_dto(dto: CreateSpeciesDto) -> Option<Self> {
        let franchise = MonsterTable::parse(&dto.franchise)?;

        Some(Self {
            franchise,
            name: dto.name,
            types: dto.types.into_iter().take(5).collect(),
            attribute: dto.attribute,
            rank: dto.rank,
            stage: dto.stage,
            is_legendary: dto.is_legendary,
            is_mythical: dto.is_mythical,
            evolves_from: dto.evolves_from,
            evolves_to: dto.evolves_to,
            breeding_results: dto.breeding_results,
        })
    }
}

/// A move monsters can learn.
#[derive(Debug, Clone, PartialEq)]
pub struct Move {
    pub id: i32,
    pub name: String,
    pub move_type: String,
    /// Physical, Special or Status.
    pub category: String,
    pub power: Option<i32>,
    pub accuracy: Option<i32>,
    pub description: Option<String>,
    pub effect_chance: Option<i32>,
    pub attribute: Option<String>,
}

impl Move {
    pub fn from_entity(entity: entity::monster_move::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            move_type: entity.move_type,
            category: entity.category,
            power: entity.power,
            accuracy: entity.accuracy,
            description: entity.description,
            effect_chance: entity.effect_chance,
            attribute: entity.attribute,
        }
    }

    pub fn into_dto(self) -> MoveDto {
        MoveDto {
            id: self.id,
            name: self.name,
            move_type: self.move_type,
            category: self.category,
            power: self.power,
            accuracy: self.accuracy,
            description: self.description,
            effect_chance: self.effect_chance,
            attribute: self.attribute,
        }
    }

    /// The move used when a monster knows nothing better.
    pub fn tackle() -> Self {
        Self {
            id: 0,
            name: FALLBACK_MOVE.to_string(),
            move_type: "Normal".to_string(),
            category: "Physical".to_string(),
            power: Some(40),
            accuracy: Some(100),
            description: None,
            effect_chance: None,
            attribute: None,
        }
    }

    pub fn is_status(&self) -> bool {
        self.category.eq_ignore_ascii_case("status")
    }

    /// True for moves that deal damage when they hit.
    pub fn is_damaging(&self) -> bool {
        !self.is_status() && self.power.unwrap_or(0) > 0
    }
}

#[derive(Debug, Clone)]
pub struct CreateMoveParam {
    pub name: String,
    pub move_type: String,
    pub category: String,
    pub power: Option<i32>,
    pub accuracy: Option<i32>,
    pub description: Option<String>,
    pub effect_chance: Option<i32>,
    pub attribute: Option<String>,
}

impl CreateMoveParam {
    pub fn from_dto(dto: CreateMoveDto) -> Self {
        Self {
            name: dto.name,
            move_type: dto.move_type,
            category: dto.category,
            power: dto.power,
            accuracy: dto.accuracy,
            description: dto.description,
            effect_chance: dto.effect_chance,
            attribute: dto.attribute,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ability {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl Ability {
    pub fn from_entity(entity: entity::ability::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }

    pub fn into_dto(self) -> AbilityDto {
        AbilityDto {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAbilityParam {
    pub name: String,
    pub description: Option<String>,
}

impl CreateAbilityParam {
    pub fn from_dto(dto: CreateAbilityDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }
}
