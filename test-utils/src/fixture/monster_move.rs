//! Move fixtures for creating in-memory move rows.

use entity::monster_move;

/// Creates a Tackle move: Normal, Physical, 40 power, 100 accuracy.
pub fn entity() -> monster_move::Model {
    entity_builder().build()
}

/// Creates a move entity builder for customization.
pub fn entity_builder() -> MonsterMoveEntityBuilder {
    MonsterMoveEntityBuilder::default()
}

/// Builder for creating customized move entity models.
pub struct MonsterMoveEntityBuilder {
    model: monster_move::Model,
}

impl Default for MonsterMoveEntityBuilder {
    fn default() -> Self {
        Self {
            model: monster_move::Model {
                id: 1,
                name: "Tackle".to_string(),
                move_type: "Normal".to_string(),
                category: "Physical".to_string(),
                power: Some(40),
                accuracy: Some(100),
                description: None,
                effect_chance: None,
                attribute: None,
            },
        }
    }
}

impl MonsterMoveEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.model.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.model.name = name.into();
        self
    }

    pub fn move_type(mut self, move_type: impl Into<String>) -> Self {
        self.model.move_type = move_type.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.model.category = category.into();
        self
    }

    pub fn power(mut self, power: Option<i32>) -> Self {
        self.model.power = power;
        self
    }

    pub fn accuracy(mut self, accuracy: Option<i32>) -> Self {
        self.model.accuracy = accuracy;
        self
    }

    pub fn description(mut self, description: Option<&str>) -> Self {
        self.model.description = description.map(str::to_string);
        self
    }

    pub fn effect_chance(mut self, effect_chance: Option<i32>) -> Self {
        self.model.effect_chance = effect_chance;
        self
    }

    pub fn attribute(mut self, attribute: Option<&str>) -> Self {
        self.model.attribute = attribute.map(str::to_string);
        self
    }

    /// Builds and returns the move entity model.
    pub fn build(self) -> monster_move::Model {
        self.model
    }
}
