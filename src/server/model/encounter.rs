//! Encounter domain models.
//!
//! [`EncounterPlan`] is what the engine generates; [`Encounter`] is the stored
//! version with ids for each group.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};

use crate::{
    model::encounter::{
        CaptureDto, CaptureResultDto, EncounterDto, EncounterGroupDto, EncounterItemDto,
        NpcTrainerDto,
    },
    server::model::monster::Monster,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterKind {
    Wild,
    Battle,
    Item,
}

impl EncounterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wild => "wild",
            Self::Battle => "battle",
            Self::Item => "item",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "wild" => Some(Self::Wild),
            "battle" => Some(Self::Battle),
            "item" => Some(Self::Item),
            _ => None,
        }
    }
}

/// An NPC trainer fighting in a battle encounter, stored as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpcTrainer {
    pub name: String,
    pub level: i32,
}

/// The item found in an item encounter, stored as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterItem {
    pub category: String,
    pub name: String,
    pub quantity: i32,
}

impl EncounterItem {
    pub fn into_dto(self) -> EncounterItemDto {
        EncounterItemDto {
            category: self.category,
            name: self.name,
            quantity: self.quantity,
        }
    }
}

/// A generated monster group before it is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupPlan {
    pub species: Vec<String>,
    pub types: Vec<String>,
    pub attribute: Option<String>,
    pub count: i32,
    pub level: i32,
    pub agro: i32,
    pub activity: String,
}

/// A generated encounter before it is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct EncounterPlan {
    pub kind: EncounterKind,
    /// Set when aggressive wild monsters turned the encounter into a battle.
    pub auto_battle: bool,
    pub npc_trainers: Vec<NpcTrainer>,
    pub groups: Vec<GroupPlan>,
    pub item: Option<EncounterItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EncounterGroup {
    pub id: i32,
    pub encounter_id: i32,
    pub position: i32,
    pub species: Vec<String>,
    pub types: Vec<String>,
    pub attribute: Option<String>,
    pub count: i32,
    pub level: i32,
    pub agro: i32,
    pub activity: String,
}

impl EncounterGroup {
    /// Converts an entity model to the group domain model.
    ///
    /// # Returns
    /// - `Ok(EncounterGroup)` - The converted domain model
    /// - `Err(DbErr::Json)` - Species or types are not arrays of strings
    pub fn from_entity(entity: entity::encounter_group::Model) -> Result<Self, DbErr> {
        let species: Vec<String> = serde_json::from_value(entity.species)
            .map_err(|e| DbErr::Json(format!("Invalid group species: {}", e)))?;
        let types: Vec<String> = serde_json::from_value(entity.types)
            .map_err(|e| DbErr::Json(format!("Invalid group types: {}", e)))?;

        Ok(Self {
            id: entity.id,
            encounter_id: entity.encounter_id,
            position: entity.position,
            species,
            types,
            attribute: entity.attribute,
            count: entity.count,
            level: entity.level,
            agro: entity.agro,
            activity: entity.activity,
        })
    }

    pub fn into_dto(self) -> EncounterGroupDto {
        EncounterGroupDto {
            id: self.id,
            position: self.position,
            species: self.species,
            types: self.types,
            attribute: self.attribute,
            count: self.count,
            level: self.level,
            agro: self.agro,
            activity: self.activity,
        }
    }

    /// Species joined with `/`, as used for wild monster names.
    pub fn display_name(&self) -> String {
        self.species.join("/")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Encounter {
    pub id: i32,
    pub kind: EncounterKind,
    pub auto_battle: bool,
    pub npc_trainers: Vec<NpcTrainer>,
    pub item: Option<EncounterItem>,
    /// Ordered by position.
    pub groups: Vec<EncounterGroup>,
    pub created_at: DateTime<Utc>,
}

impl Encounter {
    /// Converts an encounter entity and its groups to the domain model.
    ///
    /// # Arguments
    /// - `entity` - The encounter entity model
    /// - `groups` - The encounter's groups, already ordered by position
    ///
    /// # Returns
    /// - `Ok(Encounter)` - The converted domain model
    /// - `Err(DbErr)` - Unknown kind or malformed JSON columns
    pub fn from_entity(
        entity: entity::encounter::Model,
        groups: Vec<entity::encounter_group::Model>,
    ) -> Result<Self, DbErr> {
        let kind = EncounterKind::parse(&entity.kind)
            .ok_or_else(|| DbErr::Custom(format!("Unknown encounter kind: {}", entity.kind)))?;
        let npc_trainers: Vec<NpcTrainer> = serde_json::from_value(entity.npc_trainers)
            .map_err(|e| DbErr::Json(format!("Invalid NPC trainers: {}", e)))?;
        let item = entity
            .item
            .map(serde_json::from_value::<EncounterItem>)
            .transpose()
            .map_err(|e| DbErr::Json(format!("Invalid encounter item: {}", e)))?;
        let groups = groups
            .into_iter()
            .map(EncounterGroup::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: entity.id,
            kind,
            auto_battle: entity.auto_battle,
            npc_trainers,
            item,
            groups,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> EncounterDto {
        EncounterDto {
            id: self.id,
            kind: self.kind.as_str().to_string(),
            auto_battle: self.auto_battle,
            npc_trainers: self
                .npc_trainers
                .into_iter()
                .map(|t| NpcTrainerDto {
                    name: t.name,
                    level: t.level,
                })
                .collect(),
            groups: self
                .groups
                .into_iter()
                .map(EncounterGroup::into_dto)
                .collect(),
            item: self.item.map(EncounterItem::into_dto),
            created_at: self.created_at,
        }
    }
}

/// Parameters for throwing a ball at a wild group.
#[derive(Debug, Clone)]
pub struct CaptureParam {
    pub encounter_id: i32,
    pub player_user_id: String,
    pub trainer_name: String,
    pub ball: String,
    /// 1-based.
    pub group_index: usize,
    pub pokepuffs: u32,
}

impl CaptureParam {
    pub fn from_dto(encounter_id: i32, dto: CaptureDto) -> Self {
        Self {
            encounter_id,
            player_user_id: dto.player_user_id,
            trainer_name: dto.trainer_name,
            ball: dto.ball,
            group_index: dto.group_index,
            pokepuffs: dto.pokepuffs,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CaptureOutcome {
    pub success: bool,
    pub chance: f64,
    /// Canonical ball name.
    pub ball: String,
    pub remaining: i32,
    pub monster: Option<Monster>,
    pub message: String,
}

impl CaptureOutcome {
    pub fn into_dto(self) -> CaptureResultDto {
        CaptureResultDto {
            success: self.success,
            chance: self.chance,
            ball: self.ball,
            remaining: self.remaining,
            monster: self.monster.map(Monster::into_dto),
            message: self.message,
        }
    }
}
