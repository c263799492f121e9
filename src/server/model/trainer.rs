//! Trainer and inventory domain models.

use chrono::{DateTime, Utc};

use crate::model::trainer::{CreateTrainerDto, InventoryChangeDto, InventoryItemDto, TrainerDto};

/// A player's character, owner of monsters, coins and an inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct Trainer {
    pub id: i32,
    pub player_user_id: String,
    pub name: String,
    pub level: i32,
    pub currency_amount: i32,
    pub total_earned_currency: i32,
    pub created_at: DateTime<Utc>,
}

impl Trainer {
    /// Converts an entity model to the trainer domain model.
    ///
    /// # Arguments
    /// - `entity` - The trainer entity model from the database
    ///
    /// # Returns
    /// - `Trainer` - The converted domain model
    pub fn from_entity(entity: entity::trainer::Model) -> Self {
        Self {
            id: entity.id,
            player_user_id: entity.player_user_id,
            name: entity.name,
            level: entity.level,
            currency_amount: entity.currency_amount,
            total_earned_currency: entity.total_earned_currency,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> TrainerDto {
        TrainerDto {
            id: self.id,
            player_user_id: self.player_user_id,
            name: self.name,
            level: self.level,
            currency_amount: self.currency_amount,
            total_earned_currency: self.total_earned_currency,
            created_at: self.created_at,
        }
    }

    /// True when `player_user_id` owns this trainer.
    pub fn is_owned_by(&self, player_user_id: &str) -> bool {
        self.player_user_id == player_user_id
    }
}

#[derive(Debug, Clone)]
pub struct CreateTrainerParam {
    pub player_user_id: String,
    pub name: String,
}

impl CreateTrainerParam {
    pub fn from_dto(dto: CreateTrainerDto) -> Self {
        Self {
            player_user_id: dto.player_user_id,
            name: dto.name,
        }
    }
}

/// One inventory stack.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub trainer_id: i32,
    pub category: String,
    pub item_name: String,
    pub quantity: i32,
}

impl InventoryItem {
    pub fn from_entity(entity: entity::trainer_inventory::Model) -> Self {
        Self {
            trainer_id: entity.trainer_id,
            category: entity.category,
            item_name: entity.item_name,
            quantity: entity.quantity,
        }
    }

    pub fn into_dto(self) -> InventoryItemDto {
        InventoryItemDto {
            category: self.category,
            item_name: self.item_name,
            quantity: self.quantity,
        }
    }
}

/// An amount of one item to add to or take from a trainer.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryChange {
    pub trainer_id: i32,
    pub category: String,
    pub item_name: String,
    pub quantity: i32,
}

impl InventoryChange {
    pub fn new(
        trainer_id: i32,
        category: impl Into<String>,
        item_name: impl Into<String>,
        quantity: i32,
    ) -> Self {
        Self {
            trainer_id,
            category: category.into(),
            item_name: item_name.into(),
            quantity,
        }
    }

    pub fn from_dto(trainer_id: i32, dto: InventoryChangeDto) -> Self {
        Self::new(trainer_id, dto.category, dto.item_name, dto.quantity)
    }
}
