use sea_orm::DatabaseConnection;

use crate::server::{
    data::{ability::AbilityRepository, monster_move::MoveRepository, species::SpeciesRepository},
    engine::constants::MonsterTable,
    error::AppError,
    model::catalogue::{
        Ability, CreateAbilityParam, CreateMoveParam, CreateSpeciesParam, Move, Species,
    },
};

const MOVE_CATEGORIES: [&str; 3] = ["Physical", "Special", "Status"];

/// Species, moves and abilities.
pub struct CatalogueService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogueService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_species(&self, param: CreateSpeciesParam) -> Result<Species, AppError> {
        if param.name.trim().is_empty() {
            return Err(AppError::BadRequest("Species name is required".to_string()));
        }
        if param.types.is_empty() {
            return Err(AppError::BadRequest(
                "A species needs at least one type".to_string(),
            ));
        }

        let repo = SpeciesRepository::new(self.db);

        Ok(repo.create(param).await?)
    }

    /// Lists species, optionally from one franchise.
    ///
    /// # Returns
    /// - `Ok(Vec<Species>)` - Species ordered by name
    /// - `Err(AppError::BadRequest)` - The franchise is unknown
    pub async fn list_species(&self, franchise: Option<&str>) -> Result<Vec<Species>, AppError> {
        let franchise = franchise
            .map(|f| {
                MonsterTable::parse(f)
                    .ok_or_else(|| AppError::BadRequest(format!("Unknown franchise: {}", f)))
            })
            .transpose()?;

        let repo = SpeciesRepository::new(self.db);

        Ok(repo.get_all(franchise).await?)
    }

    pub async fn create_move(&self, mut param: CreateMoveParam) -> Result<Move, AppError> {
        let Some(category) = MOVE_CATEGORIES
            .iter()
            .find(|c| c.eq_ignore_ascii_case(param.category.trim()))
        else {
            return Err(AppError::BadRequest(format!(
                "Move category must be one of {}",
                MOVE_CATEGORIES.join(", ")
            )));
        };
        param.category = category.to_string();

        let repo = MoveRepository::new(self.db);
        if repo.get_by_name(&param.name).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "Move {} already exists",
                param.name
            )));
        }

        Ok(repo.create(param).await?)
    }

    /// Gets a move by name, ignoring case.
    pub async fn get_move(&self, name: &str) -> Result<Move, AppError> {
        let repo = MoveRepository::new(self.db);

        repo.get_by_name(name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Move {} not found", name)))
    }

    pub async fn list_moves(&self) -> Result<Vec<Move>, AppError> {
        let repo = MoveRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn create_ability(&self, param: CreateAbilityParam) -> Result<Ability, AppError> {
        let repo = AbilityRepository::new(self.db);

        Ok(repo.create(param).await?)
    }

    pub async fn list_abilities(&self) -> Result<Vec<Ability>, AppError> {
        let repo = AbilityRepository::new(self.db);

        Ok(repo.get_all().await?)
    }
}
