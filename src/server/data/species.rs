use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    engine::constants::MonsterTable,
    model::catalogue::{CreateSpeciesParam, Species},
};

/// Repository for the species catalogue of every franchise.
pub struct SpeciesRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpeciesRepository<'a> {
    /// Creates a new SpeciesRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SpeciesRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a catalogue species.
    ///
    /// # Arguments
    /// - `param` - Species fields; types beyond five are dropped
    ///
    /// # Returns
    /// - `Ok(Species)` - The created species
    /// - `Err(DbErr)` - Database error, including a duplicate franchise and name
    pub async fn create(&self, param: CreateSpeciesParam) -> Result<Species, DbErr> {
        let types = |i: usize| param.types.get(i).cloned();
        let breeding_results =
            (!param.breeding_results.is_empty()).then(|| param.breeding_results.join(", "));

        let entity = entity::species::ActiveModel {
            franchise: ActiveValue::Set(param.franchise.as_str().to_string()),
            name: ActiveValue::Set(param.name.clone()),
            type1: ActiveValue::Set(types(0)),
            type2: ActiveValue::Set(types(1)),
            type3: ActiveValue::Set(types(2)),
            type4: ActiveValue::Set(types(3)),
            type5: ActiveValue::Set(types(4)),
            attribute: ActiveValue::Set(param.attribute),
            rank: ActiveValue::Set(param.rank),
            stage: ActiveValue::Set(param.stage),
            is_legendary: ActiveValue::Set(param.is_legendary),
            is_mythical: ActiveValue::Set(param.is_mythical),
            evolves_from: ActiveValue::Set(param.evolves_from),
            evolves_to: ActiveValue::Set(param.evolves_to),
            breeding_results: ActiveValue::Set(breeding_results),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Species::from_entity(entity)
    }

    /// Lists species ordered by name, optionally limited to one franchise.
    pub async fn get_all(&self, franchise: Option<MonsterTable>) -> Result<Vec<Species>, DbErr> {
        let mut query = entity::prelude::Species::find();
        if let Some(franchise) = franchise {
            query = query.filter(entity::species::Column::Franchise.eq(franchise.as_str()));
        }

        query
            .order_by_asc(entity::species::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(Species::from_entity)
            .collect()
    }

    /// Loads the whole catalogue for the roller and breeding engines.
    pub async fn catalogue(&self) -> Result<Vec<Species>, DbErr> {
        self.get_all(None).await
    }
}
