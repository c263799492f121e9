use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        ability::AbilityRepository, lineage::LineageRepository, monster::MonsterRepository,
        monster_move::MoveRepository, trainer::TrainerRepository,
    },
    engine::{
        rng,
        stats::{self, MonsterPools},
    },
    error::{game::GameError, AppError},
    model::monster::{CreateMonsterParam, LevelUpResult, Lineage, Monster},
};

pub struct MonsterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MonsterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a monster for a trainer, rolling everything the template leaves
    /// open from the ability and move tables.
    ///
    /// # Returns
    /// - `Ok(Monster)` - The stored monster
    /// - `Err(AppError::BadRequest)` - No species or no types were given
    /// - `Err(AppError::NotFound)` - The trainer does not exist
    /// - `Err(GameError::NotOwner)` - The trainer belongs to another player
    pub async fn create(&self, param: CreateMonsterParam) -> Result<Monster, AppError> {
        let template = param.template;
        if template.species.is_empty() || template.types.is_empty() {
            return Err(AppError::BadRequest(
                "A monster needs at least one species and one type".to_string(),
            ));
        }

        let trainer = TrainerRepository::new(self.db)
            .get_by_id(param.trainer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trainer not found".to_string()))?;
        if !trainer.is_owned_by(&param.player_user_id) {
            return Err(GameError::NotOwner.into());
        }

        let abilities: Vec<String> = AbilityRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(|a| a.name)
            .collect();
        let moves = MoveRepository::new(self.db).get_all().await?;

        let profile = stats::initialize(
            &mut rng::fresh(),
            template,
            MonsterPools {
                abilities: &abilities,
                moves: &moves,
            },
        );

        let repo = MonsterRepository::new(self.db);

        Ok(repo
            .create(trainer.id, &trainer.player_user_id, &profile)
            .await?)
    }

    pub async fn get(&self, id: i32) -> Result<Monster, AppError> {
        let repo = MonsterRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Monster not found".to_string()))
    }

    pub async fn list_by_trainer(&self, trainer_id: i32) -> Result<Vec<Monster>, AppError> {
        let repo = MonsterRepository::new(self.db);

        Ok(repo.get_by_trainer(trainer_id).await?)
    }

    /// Levels a monster up, learning moves and raising stats along the way.
    ///
    /// # Returns
    /// - `Ok(LevelUpResult)` - The saved monster and what changed
    /// - `Err(AppError::BadRequest)` - `levels` is not positive
    /// - `Err(AppError::NotFound)` - No monster with that ID
    pub async fn add_levels(&self, id: i32, levels: i32) -> Result<LevelUpResult, AppError> {
        if levels <= 0 {
            return Err(AppError::BadRequest(
                "Levels must be at least 1".to_string(),
            ));
        }

        let mut monster = self.get(id).await?;
        let moves = MoveRepository::new(self.db).get_all().await?;

        let report = stats::level_up(&mut rng::fresh(), &mut monster.profile, levels, &moves);

        let repo = MonsterRepository::new(self.db);
        let monster = repo.update_profile(id, &monster.profile).await?;

        Ok(LevelUpResult {
            monster,
            old_level: report.old_level,
            new_level: report.new_level,
            learned_moves: report.learned_moves,
            messages: report.messages,
        })
    }

    pub async fn rename(&self, id: i32, name: String) -> Result<Monster, AppError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Monster name is required".to_string()));
        }

        self.get(id).await?;
        let repo = MonsterRepository::new(self.db);

        Ok(repo.rename(id, name).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.get(id).await?;
        let repo = MonsterRepository::new(self.db);

        repo.delete(id).await?;

        Ok(())
    }

    /// Records `parent_ids` as parents of a monster. Existing links are kept.
    pub async fn add_parents(&self, id: i32, parent_ids: &[i32]) -> Result<Lineage, AppError> {
        self.get(id).await?;

        let repo = MonsterRepository::new(self.db);
        let parents = repo.get_by_ids(parent_ids).await?;
        if parents.len() != parent_ids.len() {
            return Err(AppError::NotFound("Parent monster not found".to_string()));
        }
        if parent_ids.contains(&id) {
            return Err(AppError::BadRequest(
                "A monster cannot be its own parent".to_string(),
            ));
        }

        LineageRepository::new(self.db).add(id, parent_ids).await?;

        self.lineage(id).await
    }

    /// A monster's parents and children.
    pub async fn lineage(&self, id: i32) -> Result<Lineage, AppError> {
        self.get(id).await?;

        let lineage_repo = LineageRepository::new(self.db);
        let parent_ids = lineage_repo.parent_ids(id).await?;
        let child_ids = lineage_repo.child_ids(id).await?;

        let repo = MonsterRepository::new(self.db);

        Ok(Lineage {
            monster_id: id,
            parents: repo.get_by_ids(&parent_ids).await?,
            children: repo.get_by_ids(&child_ids).await?,
        })
    }
}
