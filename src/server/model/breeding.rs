//! Breeding session domain models.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::{
        breeding::{BreedDto, BreedingSessionDto, EligibilityDto, OffspringClaimDto},
        roll::RolledMonsterDto,
    },
    server::{
        engine::breeding::Eligibility,
        model::{monster::Monster, roll::RolledMonster},
    },
};

#[derive(Debug, Clone)]
pub struct BreedParam {
    pub player_user_id: String,
    pub trainer_id: i32,
    pub parent1_id: i32,
    pub parent2_id: i32,
    pub extra_items: HashMap<String, u32>,
}

impl BreedParam {
    pub fn from_dto(dto: BreedDto) -> Self {
        Self {
            player_user_id: dto.player_user_id,
            trainer_id: dto.trainer_id,
            parent1_id: dto.parent1_id,
            parent2_id: dto.parent2_id,
            extra_items: dto.extra_items,
        }
    }
}

pub fn eligibility_dto(monster_id: i32, eligibility: Eligibility) -> EligibilityDto {
    EligibilityDto {
        monster_id,
        eligible: eligibility.eligible,
        reason: eligibility.reason,
    }
}

/// A litter waiting to be claimed.
#[derive(Debug, Clone, PartialEq)]
pub struct BreedingSession {
    pub id: i32,
    pub player_user_id: String,
    pub trainer_id: i32,
    pub parent1_id: i32,
    pub parent2_id: i32,
    pub extra_items: HashMap<String, u32>,
    pub offspring: Vec<RolledMonster>,
    /// Offspring indices already claimed.
    pub claimed: Vec<usize>,
    pub created_at: DateTime<Utc>,
}

impl BreedingSession {
    /// Converts an entity model to the breeding session domain model.
    ///
    /// # Returns
    /// - `Ok(BreedingSession)` - The converted domain model
    /// - `Err(DbErr::Json)` - A JSON column does not have the expected shape
    pub fn from_entity(entity: entity::breeding_session::Model) -> Result<Self, DbErr> {
        let extra_items: HashMap<String, u32> = serde_json::from_value(entity.extra_items)
            .map_err(|e| DbErr::Json(format!("Invalid extra items: {}", e)))?;
        let offspring: Vec<RolledMonsterDto> = serde_json::from_value(entity.offspring)
            .map_err(|e| DbErr::Json(format!("Invalid offspring: {}", e)))?;
        let claimed: Vec<usize> = serde_json::from_value(entity.claimed)
            .map_err(|e| DbErr::Json(format!("Invalid claims: {}", e)))?;

        Ok(Self {
            id: entity.id,
            player_user_id: entity.player_user_id,
            trainer_id: entity.trainer_id,
            parent1_id: entity.parent1_id,
            parent2_id: entity.parent2_id,
            extra_items,
            offspring: offspring.into_iter().map(RolledMonster::from_dto).collect(),
            claimed,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> BreedingSessionDto {
        BreedingSessionDto {
            id: self.id,
            player_user_id: self.player_user_id,
            trainer_id: self.trainer_id,
            parent1_id: self.parent1_id,
            parent2_id: self.parent2_id,
            extra_items: self.extra_items,
            offspring: self.offspring.into_iter().map(RolledMonster::into_dto).collect(),
            claimed: self.claimed,
            created_at: self.created_at,
        }
    }

    pub fn is_claimed(&self, index: usize) -> bool {
        self.claimed.contains(&index)
    }
}

/// Fields of a new breeding session row.
#[derive(Debug, Clone)]
pub struct NewBreedingSession {
    pub player_user_id: String,
    pub trainer_id: i32,
    pub parent1_id: i32,
    pub parent2_id: i32,
    pub extra_items: HashMap<String, u32>,
    pub offspring: Vec<RolledMonster>,
}

#[derive(Debug, Clone)]
pub struct OffspringClaim {
    pub monster: Monster,
    pub session: BreedingSession,
}

impl OffspringClaim {
    pub fn into_dto(self) -> OffspringClaimDto {
        OffspringClaimDto {
            monster: self.monster.into_dto(),
            session: self.session.into_dto(),
        }
    }
}
