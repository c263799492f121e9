use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TrainerDto {
    pub id: i32,
    pub player_user_id: String,
    pub name: String,
    pub level: i32,
    pub currency_amount: i32,
    pub total_earned_currency: i32,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateTrainerDto {
    pub player_user_id: String,
    pub name: String,
}

/// Coins to add, negative to spend.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AddCoinsDto {
    pub amount: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct InventoryItemDto {
    pub category: String,
    pub item_name: String,
    pub quantity: i32,
}

/// Adds to or removes from an inventory stack.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct InventoryChangeDto {
    pub category: String,
    pub item_name: String,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct HasItemDto {
    pub category: String,
    pub item_name: String,
    pub quantity: i32,
    pub has_item: bool,
}
