//! Trainer factory for creating test trainers and stocking their inventory.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test trainers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let trainer = TrainerFactory::new(&db, "player-1")
///     .name("Ash")
///     .currency_amount(500)
///     .build()
///     .await?;
/// ```
pub struct TrainerFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::trainer::Model,
}

impl<'a> TrainerFactory<'a> {
    /// Creates a new TrainerFactory with a unique name for the given player.
    pub fn new(db: &'a DatabaseConnection, player_user_id: impl Into<String>) -> Self {
        let id = next_id();
        let entity = fixture::trainer::entity_builder()
            .player_user_id(player_user_id)
            .name(format!("Trainer {}", id))
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn level(mut self, level: i32) -> Self {
        self.entity.level = level;
        self
    }

    pub fn currency_amount(mut self, currency_amount: i32) -> Self {
        self.entity.currency_amount = currency_amount;
        self
    }

    /// Builds and inserts the trainer entity into the database.
    pub async fn build(self) -> Result<entity::trainer::Model, DbErr> {
        entity::trainer::ActiveModel {
            id: ActiveValue::NotSet,
            player_user_id: ActiveValue::Set(self.entity.player_user_id),
            name: ActiveValue::Set(self.entity.name),
            level: ActiveValue::Set(self.entity.level),
            currency_amount: ActiveValue::Set(self.entity.currency_amount),
            total_earned_currency: ActiveValue::Set(self.entity.total_earned_currency),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a trainer with default values for the given player.
///
/// Shorthand for `TrainerFactory::new(db, player_user_id).build().await`.
pub async fn create_trainer(
    db: &DatabaseConnection,
    player_user_id: impl Into<String>,
) -> Result<entity::trainer::Model, DbErr> {
    TrainerFactory::new(db, player_user_id).build().await
}

/// Inserts an inventory row for a trainer.
///
/// # Arguments
/// - `db` - Database connection
/// - `trainer_id` - Trainer receiving the item
/// - `category` - Inventory category such as `"balls"` or `"items"`
/// - `item_name` - Item name
/// - `quantity` - Quantity to store
pub async fn give_item(
    db: &DatabaseConnection,
    trainer_id: i32,
    category: &str,
    item_name: &str,
    quantity: i32,
) -> Result<entity::trainer_inventory::Model, DbErr> {
    entity::trainer_inventory::ActiveModel {
        id: ActiveValue::NotSet,
        trainer_id: ActiveValue::Set(trainer_id),
        category: ActiveValue::Set(category.to_string()),
        item_name: ActiveValue::Set(item_name.to_string()),
        quantity: ActiveValue::Set(quantity),
    }
    .insert(db)
    .await
}
