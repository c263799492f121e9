//! Species fixtures for creating in-memory catalogue rows.

use entity::species;

/// Default franchise.
pub const DEFAULT_FRANCHISE: &str = "pokemon";

/// Default species name.
pub const DEFAULT_NAME: &str = "Pikachu";

/// Creates a species entity model with default values.
///
/// # Default Values
/// - franchise: `"pokemon"`
/// - name: `"Pikachu"`
/// - type1: `Some("Electric")`
/// - stage: `Some("Middle Stage")`
/// - evolves_to: `Some("Raichu")`
pub fn entity() -> species::Model {
    entity_builder().build()
}

/// Creates a species entity builder for customization.
pub fn entity_builder() -> SpeciesEntityBuilder {
    SpeciesEntityBuilder::default()
}

/// Builder for creating customized species entity models.
pub struct SpeciesEntityBuilder {
    model: species::Model,
}

impl Default for SpeciesEntityBuilder {
    fn default() -> Self {
        Self {
            model: species::Model {
                id: 1,
                franchise: DEFAULT_FRANCHISE.to_string(),
                name: DEFAULT_NAME.to_string(),
                type1: Some("Electric".to_string()),
                type2: None,
                type3: None,
                type4: None,
                type5: None,
                attribute: None,
                rank: None,
                stage: Some("Middle Stage".to_string()),
                is_legendary: false,
                is_mythical: false,
                evolves_from: Some("Pichu".to_string()),
                evolves_to: Some("Raichu".to_string()),
                breeding_results: None,
            },
        }
    }
}

impl SpeciesEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.model.id = id;
        self
    }

    pub fn franchise(mut self, franchise: impl Into<String>) -> Self {
        self.model.franchise = franchise.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.model.name = name.into();
        self
    }

    /// Replaces all type slots with the given types in order.
    pub fn types(mut self, types: &[&str]) -> Self {
        let mut slots = types.iter().map(|t| Some(t.to_string()));
        self.model.type1 = slots.next().flatten();
        self.model.type2 = slots.next().flatten();
        self.model.type3 = slots.next().flatten();
        self.model.type4 = slots.next().flatten();
        self.model.type5 = slots.next().flatten();
        self
    }

    pub fn attribute(mut self, attribute: Option<&str>) -> Self {
        self.model.attribute = attribute.map(str::to_string);
        self
    }

    pub fn rank(mut self, rank: Option<&str>) -> Self {
        self.model.rank = rank.map(str::to_string);
        self
    }

    pub fn stage(mut self, stage: Option<&str>) -> Self {
        self.model.stage = stage.map(str::to_string);
        self
    }

    pub fn legendary(mut self, is_legendary: bool) -> Self {
        self.model.is_legendary = is_legendary;
        self
    }

    pub fn mythical(mut self, is_mythical: bool) -> Self {
        self.model.is_mythical = is_mythical;
        self
    }

    pub fn evolves_from(mut self, evolves_from: Option<&str>) -> Self {
        self.model.evolves_from = evolves_from.map(str::to_string);
        self
    }

    pub fn evolves_to(mut self, evolves_to: Option<&str>) -> Self {
        self.model.evolves_to = evolves_to.map(str::to_string);
        self
    }

    pub fn breeding_results(mut self, breeding_results: Option<&str>) -> Self {
        self.model.breeding_results = breeding_results.map(str::to_string);
        self
    }

    /// Builds and returns the species entity model.
    pub fn build(self) -> species::Model {
        self.model
    }
}
