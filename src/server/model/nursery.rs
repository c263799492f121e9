//! Hatch session domain models.
//!
//! Hatch parameters are stored as their wire type, see `crate::model::nursery`,
//! so that a reroll can replay them exactly.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::nursery::{
        HatchClaimDto, HatchParams, HatchSelectionDto, HatchSessionDto, HatchedEggDto,
        SelectHatchDto, SpeciesInputs, StartHatchDto,
    },
    server::{
        engine::hatcher::HatchedEgg,
        model::{monster::Monster, roll::RolledMonster},
    },
};

#[derive(Debug, Clone)]
pub struct StartHatchParam {
    pub player_user_id: String,
    pub trainer_id: i32,
    pub egg_count: u32,
    pub use_incubator: bool,
    pub image_url: Option<String>,
    pub selected_items: HashMap<String, u32>,
    pub species_inputs: SpeciesInputs,
}

impl StartHatchParam {
    pub fn from_dto(dto: StartHatchDto) -> Self {
        Self {
            player_user_id: dto.player_user_id,
            trainer_id: dto.trainer_id,
            egg_count: dto.egg_count,
            use_incubator: dto.use_incubator,
            image_url: dto.image_url,
            selected_items: dto.selected_items,
            species_inputs: dto.species_inputs,
        }
    }

    pub fn hatch_params(&self) -> HatchParams {
        HatchParams {
            selected_items: self.selected_items.clone(),
            species_inputs: self.species_inputs.clone(),
        }
    }
}

fn egg_dto(egg: HatchedEgg) -> HatchedEggDto {
    HatchedEggDto {
        egg_id: egg.egg_id,
        seed: egg.seed,
        monsters: egg.monsters.into_iter().map(RolledMonster::into_dto).collect(),
    }
}

fn egg_from_dto(dto: HatchedEggDto) -> HatchedEgg {
    HatchedEgg {
        egg_id: dto.egg_id,
        seed: dto.seed,
        monsters: dto.monsters.into_iter().map(RolledMonster::from_dto).collect(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HatchSession {
    pub id: i32,
    pub player_user_id: String,
    pub trainer_id: i32,
    pub params: HatchParams,
    pub eggs: Vec<HatchedEgg>,
    pub claimed: Vec<HatchClaimDto>,
    pub created_at: DateTime<Utc>,
}

impl HatchSession {
    /// Converts an entity model to the hatch session domain model.
    ///
    /// # Returns
    /// - `Ok(HatchSession)` - The converted domain model
    /// - `Err(DbErr::Json)` - A JSON column does not have the expected shape
    pub fn from_entity(entity: entity::hatch_session::Model) -> Result<Self, DbErr> {
        let params: HatchParams = serde_json::from_value(entity.params)
            .map_err(|e| DbErr::Json(format!("Invalid hatch params: {}", e)))?;
        let eggs: Vec<HatchedEggDto> = serde_json::from_value(entity.eggs)
            .map_err(|e| DbErr::Json(format!("Invalid eggs: {}", e)))?;
        let claimed: Vec<HatchClaimDto> = serde_json::from_value(entity.claimed)
            .map_err(|e| DbErr::Json(format!("Invalid claims: {}", e)))?;

        Ok(Self {
            id: entity.id,
            player_user_id: entity.player_user_id,
            trainer_id: entity.trainer_id,
            params,
            eggs: eggs.into_iter().map(egg_from_dto).collect(),
            claimed,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> HatchSessionDto {
        HatchSessionDto {
            id: self.id,
            player_user_id: self.player_user_id,
            trainer_id: self.trainer_id,
            params: self.params,
            eggs: self.eggs.into_iter().map(egg_dto).collect(),
            claimed: self.claimed,
            created_at: self.created_at,
        }
    }

    pub fn egg(&self, egg_id: u32) -> Option<&HatchedEgg> {
        self.eggs.iter().find(|e| e.egg_id == egg_id)
    }

    /// Claims already made from one egg.
    pub fn claims_for(&self, egg_id: u32) -> usize {
        self.claimed.iter().filter(|c| c.egg_id == egg_id).count()
    }

    pub fn is_claimed(&self, egg_id: u32, option_index: usize) -> bool {
        self.claimed
            .iter()
            .any(|c| c.egg_id == egg_id && c.option_index == option_index)
    }

    /// Serialized eggs, for persisting.
    pub fn eggs_json(eggs: &[HatchedEgg]) -> serde_json::Value {
        serde_json::json!(eggs.iter().cloned().map(egg_dto).collect::<Vec<_>>())
    }
}

/// Fields of a new hatch session row.
#[derive(Debug, Clone)]
pub struct NewHatchSession {
    pub player_user_id: String,
    pub trainer_id: i32,
    pub params: HatchParams,
    pub eggs: Vec<HatchedEgg>,
}

#[derive(Debug, Clone)]
pub struct SelectHatchParam {
    pub player_user_id: String,
    pub egg_id: u32,
    pub option_index: usize,
    pub name: Option<String>,
    pub use_edenwiess: bool,
}

impl SelectHatchParam {
    pub fn from_dto(dto: SelectHatchDto) -> Self {
        Self {
            player_user_id: dto.player_user_id,
            egg_id: dto.egg_id,
            option_index: dto.option_index,
            name: dto.name,
            use_edenwiess: dto.use_edenwiess,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HatchSelection {
    pub monster: Monster,
    pub session: HatchSession,
}

impl HatchSelection {
    pub fn into_dto(self) -> HatchSelectionDto {
        HatchSelectionDto {
            monster: self.monster.into_dto(),
            session: self.session.into_dto(),
        }
    }
}
