//! Monster domain models and parameters.
//!
//! A monster's game data lives in [`MonsterProfile`], which the engine creates
//! and levels up without knowing about persistence. [`Monster`] adds the
//! ownership columns a stored monster carries.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::monster::{CreateMonsterDto, LevelUpDto, LineageDto, MonsterDto, StatBlockDto},
    server::engine::{constants::DEFAULT_WHERE_MET, stats::StatBlock},
};

/// The game data of a monster: species, types, stats and moves.
#[derive(Debug, Clone, PartialEq)]
pub struct MonsterProfile {
    pub name: String,
    /// One to three species names.
    pub species: Vec<String>,
    /// One to five types.
    pub types: Vec<String>,
    pub attribute: Option<String>,
    pub level: i32,
    pub stats: StatBlock,
    pub ivs: StatBlock,
    pub evs: StatBlock,
    pub nature: String,
    pub characteristic: String,
    pub gender: String,
    pub friendship: i32,
    pub ability1: String,
    pub ability2: String,
    pub moveset: Vec<String>,
    pub where_met: String,
    pub img_link: Option<String>,
}

/// What a caller decides about a new monster. Everything else is rolled by
/// [`crate::server::engine::stats::initialize`].
#[derive(Debug, Clone, PartialEq)]
pub struct MonsterTemplate {
    pub name: String,
    pub species: Vec<String>,
    pub types: Vec<String>,
    pub attribute: Option<String>,
    pub level: i32,
    pub where_met: String,
    pub img_link: Option<String>,
    /// Fixed starting friendship instead of a random one.
    pub friendship: Option<i32>,
}

impl MonsterTemplate {
    pub fn new(name: impl Into<String>, species: Vec<String>, types: Vec<String>) -> Self {
        Self {
            name: name.into(),
            species,
            types,
            attribute: None,
            level: 1,
            where_met: DEFAULT_WHERE_MET.to_string(),
            img_link: None,
            friendship: None,
        }
    }

    pub fn attribute(mut self, attribute: Option<String>) -> Self {
        self.attribute = attribute;
        self
    }

    pub fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    pub fn where_met(mut self, where_met: impl Into<String>) -> Self {
        self.where_met = where_met.into();
        self
    }

    pub fn img_link(mut self, img_link: Option<String>) -> Self {
        self.img_link = img_link;
        self
    }

    pub fn friendship(mut self, friendship: i32) -> Self {
        self.friendship = Some(friendship);
        self
    }
}

/// A stored monster.
#[derive(Debug, Clone, PartialEq)]
pub struct Monster {
    pub id: i32,
    pub trainer_id: i32,
    pub player_user_id: String,
    pub created_at: DateTime<Utc>,
    pub profile: MonsterProfile,
}

impl Monster {
    /// Converts an entity model to the monster domain model.
    ///
    /// # Arguments
    /// - `entity` - The monster entity model from the database
    ///
    /// # Returns
    /// - `Ok(Monster)` - The converted domain model
    /// - `Err(DbErr::Json)` - The stored moveset is not an array of strings
    pub fn from_entity(entity: entity::monster::Model) -> Result<Self, DbErr> {
        let moveset: Vec<String> = serde_json::from_value(entity.moveset)
            .map_err(|e| DbErr::Json(format!("Invalid moveset: {}", e)))?;

        let species = std::iter::once(entity.species1)
            .chain(entity.species2)
            .chain(entity.species3)
            .filter(|s| !s.is_empty())
            .collect();
        let types = std::iter::once(entity.type1)
            .chain(entity.type2)
            .chain(entity.type3)
            .chain(entity.type4)
            .chain(entity.type5)
            .filter(|t| !t.is_empty())
            .collect();

        Ok(Self {
            id: entity.id,
            trainer_id: entity.trainer_id,
            player_user_id: entity.player_user_id,
            created_at: entity.created_at,
            profile: MonsterProfile {
                name: entity.name,
                species,
                types,
                attribute: entity.attribute,
                level: entity.level,
                stats: StatBlock {
                    hp: entity.hp_total,
                    atk: entity.atk_total,
                    def: entity.def_total,
                    spa: entity.spa_total,
                    spd: entity.spd_total,
                    spe: entity.spe_total,
                },
                ivs: StatBlock {
                    hp: entity.hp_iv,
                    atk: entity.atk_iv,
                    def: entity.def_iv,
                    spa: entity.spa_iv,
                    spd: entity.spd_iv,
                    spe: entity.spe_iv,
                },
                evs: StatBlock {
                    hp: entity.hp_ev,
                    atk: entity.atk_ev,
                    def: entity.def_ev,
                    spa: entity.spa_ev,
                    spd: entity.spd_ev,
                    spe: entity.spe_ev,
                },
                nature: entity.nature,
                characteristic: entity.characteristic,
                gender: entity.gender,
                friendship: entity.friendship,
                ability1: entity.ability1,
                ability2: entity.ability2,
                moveset,
                where_met: entity.where_met,
                img_link: entity.img_link,
            },
        })
    }

    pub fn into_dto(self) -> MonsterDto {
        let p = self.profile;
        MonsterDto {
            id: self.id,
            trainer_id: self.trainer_id,
            player_user_id: self.player_user_id,
            name: p.name,
            species: p.species,
            types: p.types,
            attribute: p.attribute,
            level: p.level,
            stats: stat_block_dto(p.stats),
            ivs: stat_block_dto(p.ivs),
            evs: stat_block_dto(p.evs),
            nature: p.nature,
            characteristic: p.characteristic,
            gender: p.gender,
            friendship: p.friendship,
            abilities: vec![p.ability1, p.ability2],
            moveset: p.moveset,
            where_met: p.where_met,
            img_link: p.img_link,
            created_at: self.created_at,
        }
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    pub fn level(&self) -> i32 {
        self.profile.level
    }
}

fn stat_block_dto(block: StatBlock) -> StatBlockDto {
    StatBlockDto {
        hp: block.hp,
        atk: block.atk,
        def: block.def,
        spa: block.spa,
        spd: block.spd,
        spe: block.spe,
    }
}

/// Parameters for creating a monster owned by a trainer.
#[derive(Debug, Clone)]
pub struct CreateMonsterParam {
    pub trainer_id: i32,
    pub player_user_id: String,
    pub template: MonsterTemplate,
}

impl CreateMonsterParam {
    pub fn new(trainer_id: i32, player_user_id: impl Into<String>, template: MonsterTemplate) -> Self {
        Self {
            trainer_id,
            player_user_id: player_user_id.into(),
            template,
        }
    }

    pub fn from_dto(dto: CreateMonsterDto) -> Self {
        let template = MonsterTemplate::new(dto.name, dto.species, dto.types)
            .attribute(dto.attribute)
            .level(dto.level)
            .img_link(dto.img_link);
        let template = match dto.where_met {
            Some(where_met) => template.where_met(where_met),
            None => template,
        };

        Self {
            trainer_id: dto.trainer_id,
            player_user_id: dto.player_user_id,
            template,
        }
    }
}

/// Result of leveling a monster up.
#[derive(Debug, Clone)]
pub struct LevelUpResult {
    pub monster: Monster,
    pub old_level: i32,
    pub new_level: i32,
    pub learned_moves: Vec<String>,
    pub messages: Vec<String>,
}

impl LevelUpResult {
    pub fn into_dto(self) -> LevelUpDto {
        LevelUpDto {
            monster: self.monster.into_dto(),
            old_level: self.old_level,
            new_level: self.new_level,
            learned_moves: self.learned_moves,
            messages: self.messages,
        }
    }
}

/// A monster's parents and children.
#[derive(Debug, Clone)]
pub struct Lineage {
    pub monster_id: i32,
    pub parents: Vec<Monster>,
    pub children: Vec<Monster>,
}

impl Lineage {
    pub fn into_dto(self) -> LineageDto {
        LineageDto {
            monster_id: self.monster_id,
            parents: self.parents.into_iter().map(Monster::into_dto).collect(),
            children: self.children.into_iter().map(Monster::into_dto).collect(),
        }
    }
}
