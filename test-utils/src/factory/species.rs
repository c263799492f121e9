//! Species factory for seeding the catalogue in tests.

use crate::fixture;
use crate::fixture::species::SpeciesEntityBuilder;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, IntoActiveModel};

/// Factory wrapping the species fixture builder with database insertion.
///
/// # Example
///
/// ```rust,ignore
/// let charizard = SpeciesFactory::new(&db, "Charizard")
///     .types(&["Fire", "Flying"])
///     .stage(Some("Final Stage"))
///     .build()
///     .await?;
/// ```
pub struct SpeciesFactory<'a> {
    db: &'a DatabaseConnection,
    builder: SpeciesEntityBuilder,
}

impl<'a> SpeciesFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, name: impl Into<String>) -> Self {
        Self {
            db,
            builder: fixture::species::entity_builder().name(name),
        }
    }

    /// Applies a customization to the underlying fixture builder.
    pub fn with(mut self, f: impl FnOnce(SpeciesEntityBuilder) -> SpeciesEntityBuilder) -> Self {
        self.builder = f(self.builder);
        self
    }

    pub fn franchise(self, franchise: &str) -> Self {
        self.with(|b| b.franchise(franchise))
    }

    pub fn types(self, types: &[&str]) -> Self {
        self.with(|b| b.types(types))
    }

    pub fn stage(self, stage: Option<&str>) -> Self {
        self.with(|b| b.stage(stage))
    }

    pub fn evolves_to(self, evolves_to: Option<&str>) -> Self {
        self.with(|b| b.evolves_to(evolves_to))
    }

    /// Builds and inserts the species entity into the database.
    pub async fn build(self) -> Result<entity::species::Model, DbErr> {
        let mut active = self.builder.build().into_active_model();
        active.id = ActiveValue::NotSet;
        active.insert(self.db).await
    }
}

/// Creates a pokemon species with the given name and types.
pub async fn create_species(
    db: &DatabaseConnection,
    name: &str,
    types: &[&str],
) -> Result<entity::species::Model, DbErr> {
    SpeciesFactory::new(db, name).types(types).build().await
}
