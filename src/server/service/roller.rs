use sea_orm::DatabaseConnection;

use crate::{
    model::roll::{RollParams, UserSettings},
    server::{
        data::species::SpeciesRepository,
        engine::{rng, roller::MonsterRoller},
        error::AppError,
        model::roll::{CatalogueOptions, RollResult},
    },
};

pub const MAX_ROLL_COUNT: u32 = 50;

/// Rolls monsters from the catalogue without creating them.
pub struct RollerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RollerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Rolls `count` monsters. The same seed, filters and catalogue always roll
    /// the same monsters; without a seed a random one is generated and returned.
    ///
    /// # Returns
    /// - `Ok(RollResult)` - The seed used and the rolled monsters; rolls that
    ///   found no matching species are left out
    /// - `Err(AppError::BadRequest)` - `count` is outside 1 to 50
    pub async fn roll(
        &self,
        params: RollParams,
        settings: UserSettings,
        count: u32,
        seed: Option<String>,
    ) -> Result<RollResult, AppError> {
        if !(1..=MAX_ROLL_COUNT).contains(&count) {
            return Err(AppError::BadRequest(format!(
                "Count must be between 1 and {}",
                MAX_ROLL_COUNT
            )));
        }

        let catalogue = SpeciesRepository::new(self.db).catalogue().await?;
        let roller = MonsterRoller::new(&catalogue, settings);

        let seed = seed
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| rng::random_seed(&mut rng::fresh()));
        let monsters = roller.roll_many(&seed, &params, count as usize);

        Ok(RollResult { seed, monsters })
    }

    /// Distinct species, types, attributes, ranks and stages in the catalogue.
    pub async fn options(&self) -> Result<CatalogueOptions, AppError> {
        let catalogue = SpeciesRepository::new(self.db).catalogue().await?;
        let roller = MonsterRoller::new(&catalogue, UserSettings::default());

        Ok(CatalogueOptions {
            species: roller.species_names(),
            types: roller.types(),
            attributes: roller.attributes(),
            ranks: roller.ranks(),
            stages: roller.stages(),
        })
    }
}
