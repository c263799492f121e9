//! Monster fixtures for creating in-memory test data.
//!
//! The defaults describe a level 10 Pikachu with flat stats of 30 so that
//! battle math in tests is easy to reason about.

use chrono::Utc;
use entity::monster;

/// Default test monster name.
pub const DEFAULT_NAME: &str = "Sparky";

/// Default primary species.
pub const DEFAULT_SPECIES: &str = "Pikachu";

/// Default primary type.
pub const DEFAULT_TYPE: &str = "Electric";

/// Default monster level.
pub const DEFAULT_LEVEL: i32 = 10;

/// Default value used for every stat total.
pub const DEFAULT_STAT: i32 = 30;

/// Creates a monster entity model with default values.
pub fn entity() -> monster::Model {
    entity_builder().build()
}

/// Creates a monster entity builder for customization.
pub fn entity_builder() -> MonsterEntityBuilder {
    MonsterEntityBuilder::default()
}

/// Builder for creating customized monster entity models.
pub struct MonsterEntityBuilder {
    id: i32,
    trainer_id: i32,
    player_user_id: String,
    name: String,
    species1: String,
    type1: String,
    type2: Option<String>,
    attribute: Option<String>,
    level: i32,
    hp_total: i32,
    stat: i32,
    friendship: i32,
    moveset: Vec<String>,
}

impl Default for MonsterEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            trainer_id: 1,
            player_user_id: super::trainer::DEFAULT_PLAYER_USER_ID.to_string(),
            name: DEFAULT_NAME.to_string(),
            species1: DEFAULT_SPECIES.to_string(),
            type1: DEFAULT_TYPE.to_string(),
            type2: None,
            attribute: None,
            level: DEFAULT_LEVEL,
            hp_total: 50,
            stat: DEFAULT_STAT,
            friendship: 0,
            moveset: vec!["Tackle".to_string()],
        }
    }
}

impl MonsterEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn trainer_id(mut self, trainer_id: i32) -> Self {
        self.trainer_id = trainer_id;
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

    pub fn species1(mut self, species: impl Into<String>) -> Self {
        self.species1 = species.into();
        self
    }

    pub fn type1(mut self, type1: impl Into<String>) -> Self {
        self.type1 = type1.into();
        self
    }

    pub fn type2(mut self, type2: Option<String>) -> Self {
        self.type2 = type2;
        self
    }

    pub fn attribute(mut self, attribute: Option<String>) -> Self {
        self.attribute = attribute;
        self
    }

    pub fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    pub fn hp_total(mut self, hp_total: i32) -> Self {
        self.hp_total = hp_total;
        self
    }

    /// Sets every non-HP stat total to the same value.
    pub fn stat(mut self, stat: i32) -> Self {
        self.stat = stat;
        self
    }

    pub fn friendship(mut self, friendship: i32) -> Self {
        self.friendship = friendship;
        self
    }

    pub fn moveset(mut self, moveset: Vec<String>) -> Self {
        self.moveset = moveset;
        self
    }

    /// Builds and returns the monster entity model.
    pub fn build(self) -> monster::Model {
        monster::Model {
            id: self.id,
            trainer_id: self.trainer_id,
            player_user_id: self.player_user_id,
            name: self.name,
            species1: self.species1,
            species2: None,
            species3: None,
            type1: self.type1,
            type2: self.type2,
            type3: None,
            type4: None,
            type5: None,
            attribute: self.attribute,
            level: self.level,
            hp_total: self.hp_total,
            atk_total: self.stat,
            def_total: self.stat,
            spa_total: self.stat,
            spd_total: self.stat,
            spe_total: self.stat,
            hp_iv: 15,
            atk_iv: 15,
            def_iv: 15,
            spa_iv: 15,
            spd_iv: 15,
            spe_iv: 15,
            hp_ev: 0,
            atk_ev: 0,
            def_ev: 0,
            spa_ev: 0,
            spd_ev: 0,
            spe_ev: 0,
            nature: "Hardy".to_string(),
            characteristic: "Loves to eat".to_string(),
            gender: "Male".to_string(),
            friendship: self.friendship,
            ability1: "Static".to_string(),
            ability2: "Lightning Rod".to_string(),
            moveset: serde_json::json!(self.moveset),
            where_met: "Adoption Center".to_string(),
            img_link: None,
            created_at: Utc::now(),
        }
    }
}
