//! Trainer fixtures for creating in-memory test data.

use chrono::Utc;
use entity::trainer;

/// Default test trainer name.
pub const DEFAULT_NAME: &str = "Test Trainer";

/// Default player user ID owning the trainer.
pub const DEFAULT_PLAYER_USER_ID: &str = "player-1";

/// Default trainer level.
pub const DEFAULT_LEVEL: i32 = 1;

/// Default coin balance.
pub const DEFAULT_CURRENCY: i32 = 0;

/// Creates a trainer entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - player_user_id: `"player-1"`
/// - name: `"Test Trainer"`
/// - level: `1`
/// - currency_amount: `0`
/// - total_earned_currency: `0`
pub fn entity() -> trainer::Model {
    entity_builder().build()
}

/// Creates a trainer entity builder for customization.
pub fn entity_builder() -> TrainerEntityBuilder {
    TrainerEntityBuilder::default()
}

/// Builder for creating customized trainer entity models.
pub struct TrainerEntityBuilder {
    id: i32,
    player_user_id: String,
    name: String,
    level: i32,
    currency_amount: i32,
    total_earned_currency: i32,
}

impl Default for TrainerEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            player_user_id: DEFAULT_PLAYER_USER_ID.to_string(),
            name: DEFAULT_NAME.to_string(),
            level: DEFAULT_LEVEL,
            currency_amount: DEFAULT_CURRENCY,
            total_earned_currency: DEFAULT_CURRENCY,
        }
    }
}

impl TrainerEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn player_user_id(mut self, player_user_id: impl Into<String>) -> Self {
        self.player_user_id = player_user_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    pub fn currency_amount(mut self, currency_amount: i32) -> Self {
        self.currency_amount = currency_amount;
        self
    }

    /// Builds and returns the trainer entity model.
    pub fn build(self) -> trainer::Model {
        trainer::Model {
            id: self.id,
            player_user_id: self.player_user_id,
            name: self.name,
            level: self.level,
            currency_amount: self.currency_amount,
            total_earned_currency: self.total_earned_currency,
            created_at: Utc::now(),
        }
    }
}
