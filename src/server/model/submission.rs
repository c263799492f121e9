//! Submission reward models.
//!
//! Entry types describe who appears in a submission. Ownership and current
//! monster levels are filled in by the service before the reward formulas run.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::submission::{
    AppearanceDto, ArtSubmissionDto, BonusRollsDto, ExternalArtSubmissionDto, GiftItemDto,
    MonsterEntryDto, MonsterRewardDto, NpcEntryDto, SubmissionDto, SubmissionInputDto,
    SubmissionRewardsDto, AppliedMonsterDto, AppliedRewardsDto, TrainerEntryDto,
    TrainerRewardDto, WritingSubmissionDto,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    Art,
    Writing,
    ExternalArt,
    ExternalWriting,
}

impl SubmissionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Art => "art",
            Self::Writing => "writing",
            Self::ExternalArt => "external_art",
            Self::ExternalWriting => "external_writing",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "art" => Some(Self::Art),
            "writing" => Some(Self::Writing),
            "external_art" => Some(Self::ExternalArt),
            "external_writing" => Some(Self::ExternalWriting),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    pub kind: String,
    pub count: i32,
}

impl Appearance {
    fn from_dto(dto: AppearanceDto) -> Self {
        Self {
            kind: dto.kind,
            count: dto.count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainerEntry {
    pub trainer_id: i32,
    pub appearances: Vec<Appearance>,
    pub custom_levels: i32,
    /// False when the trainer belongs to another player; its levels are a gift.
    pub is_owned: bool,
}

impl TrainerEntry {
    pub fn from_dto(dto: TrainerEntryDto) -> Self {
        Self {
            trainer_id: dto.trainer_id,
            appearances: dto.appearances.into_iter().map(Appearance::from_dto).collect(),
            custom_levels: dto.custom_levels,
            is_owned: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonsterEntry {
    pub monster_id: i32,
    pub trainer_id: Option<i32>,
    pub appearances: Vec<Appearance>,
    pub complexity_bonus: i32,
    pub custom_levels: i32,
    pub is_owned: bool,
    /// Level before the reward, used for the level cap.
    pub current_level: Option<i32>,
}

impl MonsterEntry {
    pub fn from_dto(dto: MonsterEntryDto) -> Self {
        Self {
            monster_id: dto.monster_id,
            trainer_id: None,
            appearances: dto.appearances.into_iter().map(Appearance::from_dto).collect(),
            complexity_bonus: dto.complexity_bonus,
            custom_levels: dto.custom_levels,
            is_owned: true,
            current_level: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NpcEntry {
    pub name: Option<String>,
    pub levels: i32,
}

impl NpcEntry {
    pub fn from_dto(dto: NpcEntryDto) -> Self {
        Self {
            name: dto.name,
            levels: dto.levels,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArtSubmission {
    pub quality: String,
    pub backgrounds: Vec<String>,
    pub uniquely_difficult: bool,
    pub use_static_rewards: bool,
    pub trainers: Vec<TrainerEntry>,
    pub monsters: Vec<MonsterEntry>,
    pub npcs: Vec<NpcEntry>,
}

impl ArtSubmission {
    pub fn from_dto(dto: ArtSubmissionDto) -> Self {
        Self {
            quality: dto.quality,
            backgrounds: dto.backgrounds,
            uniquely_difficult: dto.uniquely_difficult,
            use_static_rewards: dto.use_static_rewards,
            trainers: dto.trainers.into_iter().map(TrainerEntry::from_dto).collect(),
            monsters: dto.monsters.into_iter().map(MonsterEntry::from_dto).collect(),
            npcs: dto.npcs.into_iter().map(NpcEntry::from_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WritingSubmission {
    pub word_count: i32,
    pub trainers: Vec<TrainerEntry>,
    pub monsters: Vec<MonsterEntry>,
    pub npcs: Vec<NpcEntry>,
}

impl WritingSubmission {
    pub fn from_dto(dto: WritingSubmissionDto) -> Self {
        Self {
            word_count: dto.word_count,
            trainers: dto.trainers.into_iter().map(TrainerEntry::from_dto).collect(),
            monsters: dto.monsters.into_iter().map(MonsterEntry::from_dto).collect(),
            npcs: dto.npcs.into_iter().map(NpcEntry::from_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExternalCharacter {
    pub appearance: String,
    pub complexity: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExternalArtSubmission {
    pub quality: String,
    pub backgrounds: Vec<String>,
    pub characters: Vec<ExternalCharacter>,
}

impl ExternalArtSubmission {
    pub fn from_dto(dto: ExternalArtSubmissionDto) -> Self {
        Self {
            quality: dto.quality,
            backgrounds: dto.backgrounds,
            characters: dto
                .characters
                .into_iter()
                .map(|c| ExternalCharacter {
                    appearance: c.appearance,
                    complexity: c.complexity,
                })
                .collect(),
        }
    }
}

/// A submission to store and reward.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionInput {
    Art(ArtSubmission),
    Writing(WritingSubmission),
    ExternalArt(ExternalArtSubmission),
    ExternalWriting { word_count: i32 },
}

impl SubmissionInput {
    pub fn from_dto(dto: SubmissionInputDto) -> Self {
        match dto {
            SubmissionInputDto::Art(art) => Self::Art(ArtSubmission::from_dto(art)),
            SubmissionInputDto::Writing(writing) => {
                Self::Writing(WritingSubmission::from_dto(writing))
            }
            SubmissionInputDto::ExternalArt(art) => {
                Self::ExternalArt(ExternalArtSubmission::from_dto(art))
            }
            SubmissionInputDto::ExternalWriting(writing) => Self::ExternalWriting {
                word_count: writing.word_count,
            },
        }
    }

    pub fn kind(&self) -> SubmissionKind {
        match self {
            Self::Art(_) => SubmissionKind::Art,
            Self::Writing(_) => SubmissionKind::Writing,
            Self::ExternalArt(_) => SubmissionKind::ExternalArt,
            Self::ExternalWriting { .. } => SubmissionKind::ExternalWriting,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainerReward {
    pub trainer_id: i32,
    pub levels: i32,
    pub coins: i32,
    pub is_owned: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonsterReward {
    pub monster_id: i32,
    pub levels: i32,
    pub coins: i32,
    /// Levels lost to the level cap.
    pub capped_levels: i32,
    pub is_owned: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GiftItem {
    pub category: String,
    pub name: String,
    pub quantity: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BonusRolls {
    pub garden_points: i32,
    pub mission_progress: i32,
    pub boss_damage: i32,
}

/// Calculated rewards for one submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubmissionRewards {
    pub total_levels: i32,
    pub total_coins: i32,
    pub trainers: Vec<TrainerReward>,
    pub monsters: Vec<MonsterReward>,
    pub bonus: BonusRolls,
    pub gift_levels: i32,
    pub gift_items: Vec<GiftItem>,
}

impl SubmissionRewards {
    pub fn from_dto(dto: SubmissionRewardsDto) -> Self {
        Self {
            total_levels: dto.total_levels,
            total_coins: dto.total_coins,
            trainers: dto
                .trainers
                .into_iter()
                .map(|t| TrainerReward {
                    trainer_id: t.trainer_id,
                    levels: t.levels,
                    coins: t.coins,
                    is_owned: t.is_owned,
                })
                .collect(),
            monsters: dto
                .monsters
                .into_iter()
                .map(|m| MonsterReward {
                    monster_id: m.monster_id,
                    levels: m.levels,
                    coins: m.coins,
                    capped_levels: m.capped_levels,
                    is_owned: m.is_owned,
                })
                .collect(),
            bonus: BonusRolls {
                garden_points: dto.bonus.garden_points,
                mission_progress: dto.bonus.mission_progress,
                boss_damage: dto.bonus.boss_damage,
            },
            gift_levels: dto.gift_levels,
            gift_items: dto
                .gift_items
                .into_iter()
                .map(|g| GiftItem {
                    category: g.category,
                    name: g.name,
                    quantity: g.quantity,
                })
                .collect(),
        }
    }

    pub fn into_dto(self) -> SubmissionRewardsDto {
        SubmissionRewardsDto {
            total_levels: self.total_levels,
            total_coins: self.total_coins,
            trainers: self.trainers.into_iter().map(trainer_reward_dto).collect(),
            monsters: self
                .monsters
                .into_iter()
                .map(|m| MonsterRewardDto {
                    monster_id: m.monster_id,
                    levels: m.levels,
                    coins: m.coins,
                    capped_levels: m.capped_levels,
                    is_owned: m.is_owned,
                })
                .collect(),
            bonus: BonusRollsDto {
                garden_points: self.bonus.garden_points,
                mission_progress: self.bonus.mission_progress,
                boss_damage: self.bonus.boss_damage,
            },
            gift_levels: self.gift_levels,
            gift_items: self.gift_items.into_iter().map(gift_item_dto).collect(),
        }
    }

    /// Levels lost to the level cap across all monsters.
    pub fn capped_levels(&self) -> i32 {
        self.monsters.iter().map(|m| m.capped_levels).sum()
    }
}

pub fn trainer_reward_dto(reward: TrainerReward) -> TrainerRewardDto {
    TrainerRewardDto {
        trainer_id: reward.trainer_id,
        levels: reward.levels,
        coins: reward.coins,
        is_owned: reward.is_owned,
    }
}

pub fn gift_item_dto(item: GiftItem) -> GiftItemDto {
    GiftItemDto {
        category: item.category,
        name: item.name,
        quantity: item.quantity,
    }
}

/// A stored submission.
#[derive(Debug, Clone)]
pub struct Submission {
    pub id: i32,
    pub player_user_id: String,
    pub kind: SubmissionKind,
    pub title: String,
    pub rewards: SubmissionRewards,
    pub created_at: DateTime<Utc>,
}

impl Submission {
    /// Converts an entity model to the submission domain model.
    ///
    /// # Returns
    /// - `Ok(Submission)` - The converted domain model
    /// - `Err(DbErr)` - Unknown kind or malformed rewards JSON
    pub fn from_entity(entity: entity::submission::Model) -> Result<Self, DbErr> {
        let kind = SubmissionKind::parse(&entity.kind)
            .ok_or_else(|| DbErr::Custom(format!("Unknown submission kind: {}", entity.kind)))?;
        let rewards: SubmissionRewardsDto = serde_json::from_value(entity.rewards)
            .map_err(|e| DbErr::Json(format!("Invalid submission rewards: {}", e)))?;

        Ok(Self {
            id: entity.id,
            player_user_id: entity.player_user_id,
            kind,
            title: entity.title,
            rewards: SubmissionRewards::from_dto(rewards),
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> SubmissionDto {
        SubmissionDto {
            id: self.id,
            player_user_id: self.player_user_id,
            kind: self.kind.as_str().to_string(),
            title: self.title,
            rewards: self.rewards.into_dto(),
            created_at: self.created_at,
        }
    }
}

/// A monster leveled by an applied submission.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedMonster {
    pub monster_id: i32,
    pub old_level: i32,
    pub new_level: i32,
    pub learned_moves: Vec<String>,
}

/// What applying a submission actually changed.
#[derive(Debug, Clone)]
pub struct AppliedRewards {
    pub submission_id: i32,
    pub trainers: Vec<TrainerReward>,
    pub monsters: Vec<AppliedMonster>,
    pub boss_damage: i32,
    pub gift_levels: i32,
    pub gift_items: Vec<GiftItem>,
    pub capped_levels: i32,
}

impl AppliedRewards {
    pub fn into_dto(self) -> AppliedRewardsDto {
        AppliedRewardsDto {
            submission_id: self.submission_id,
            trainers: self.trainers.into_iter().map(trainer_reward_dto).collect(),
            monsters: self
                .monsters
                .into_iter()
                .map(|m| AppliedMonsterDto {
                    monster_id: m.monster_id,
                    old_level: m.old_level,
                    new_level: m.new_level,
                    learned_moves: m.learned_moves,
                })
                .collect(),
            boss_damage: self.boss_damage,
            gift_levels: self.gift_levels,
            gift_items: self.gift_items.into_iter().map(gift_item_dto).collect(),
            capped_levels: self.capped_levels,
        }
    }
}
