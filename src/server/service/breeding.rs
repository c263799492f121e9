use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        breeding_session::BreedingSessionRepository, lineage::LineageRepository,
        monster::MonsterRepository, species::SpeciesRepository,
    },
    engine::{
        breeding::{self, BreedingItems, Eligibility},
        constants::{FORGET_ME_NOT, LEGACY_LEEWAY},
        rng,
    },
    error::{game::GameError, AppError},
    model::{
        breeding::{BreedParam, BreedingSession, NewBreedingSession, OffspringClaim},
        catalogue::Species,
        monster::{CreateMonsterParam, Monster, MonsterTemplate},
    },
    service::{monster::MonsterService, trainer::TrainerService},
};

const WHERE_MET: &str = "Farm Breeding";
const OFFSPRING_FRIENDSHIP: i32 = 70;

pub struct BreedingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BreedingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Whether a monster can breed, and why not.
    pub async fn check_eligibility(&self, monster_id: i32) -> Result<Eligibility, AppError> {
        let monster = MonsterService::new(self.db).get(monster_id).await?;
        let catalogue = SpeciesRepository::new(self.db).catalogue().await?;

        Ok(breeding::monster_eligibility(
            &catalogue,
            &monster.profile.species,
        ))
    }

    /// Breeds two monsters and stores the litter in a new session.
    ///
    /// The trainer must own the first parent; the second may belong to anyone.
    /// One Legacy Leeway and the requested extra items are consumed.
    ///
    /// # Returns
    /// - `Ok(BreedingSession)` - The session holding the unclaimed offspring
    /// - `Err(GameError::NotOwner)` - The player does not own the trainer or the first parent
    /// - `Err(GameError::MonsterNotEligible)` - A parent cannot breed
    /// - `Err(GameError::MissingItem)` - The trainer lacks a required item
    /// - `Err(GameError::Rule)` - An extra item is unknown or over its limit
    pub async fn breed(&self, param: BreedParam) -> Result<BreedingSession, AppError> {
        let trainer_service = TrainerService::new(self.db);
        let trainer = trainer_service
            .get_owned(param.trainer_id, &param.player_user_id)
            .await?;

        if param.parent1_id == param.parent2_id {
            return Err(GameError::rule("A monster cannot breed with itself").into());
        }

        let monster_service = MonsterService::new(self.db);
        let parent1 = monster_service.get(param.parent1_id).await?;
        let parent2 = monster_service.get(param.parent2_id).await?;
        if parent1.trainer_id != trainer.id {
            return Err(GameError::NotOwner.into());
        }

        let catalogue = SpeciesRepository::new(self.db).catalogue().await?;
        ensure_eligible(&catalogue, &parent1)?;
        ensure_eligible(&catalogue, &parent2)?;

        let items = BreedingItems::from_requested(&param.extra_items).map_err(GameError::Rule)?;

        let mut required = vec![("items", LEGACY_LEEWAY, 1)];
        required.extend(
            items
                .consumed()
                .into_iter()
                .map(|(name, count)| ("items", name, count as i32)),
        );
        trainer_service.consume(trainer.id, &required).await?;

        let offspring = breeding::breed(
            &mut rng::fresh(),
            &catalogue,
            &parent1.profile,
            &parent2.profile,
            &items,
        );

        let repo = BreedingSessionRepository::new(self.db);

        Ok(repo
            .create(NewBreedingSession {
                player_user_id: param.player_user_id,
                trainer_id: trainer.id,
                parent1_id: parent1.id,
                parent2_id: parent2.id,
                extra_items: param.extra_items,
                offspring,
            })
            .await?)
    }

    /// Gets a session owned by `player_user_id`.
    ///
    /// # Returns
    /// - `Ok(BreedingSession)` - The session
    /// - `Err(AppError::NotFound)` - No session with that ID, or it expired
    /// - `Err(GameError::NotOwner)` - The session belongs to another player
    pub async fn get_session(
        &self,
        id: i32,
        player_user_id: &str,
    ) -> Result<BreedingSession, AppError> {
        let repo = BreedingSessionRepository::new(self.db);

        let session = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Breeding session not found".to_string()))?;
        if session.player_user_id != player_user_id {
            return Err(GameError::NotOwner.into());
        }

        Ok(session)
    }

    /// Turns one offspring into a monster for the session's trainer and links
    /// it to both parents.
    ///
    /// # Returns
    /// - `Ok(OffspringClaim)` - The new monster and the updated session
    /// - `Err(GameError::Rule)` - The index is out of range
    /// - `Err(GameError::AlreadyClaimed)` - The offspring was claimed before
    pub async fn claim(
        &self,
        session_id: i32,
        player_user_id: &str,
        index: usize,
        name: Option<String>,
    ) -> Result<OffspringClaim, AppError> {
        let session = self.get_session(session_id, player_user_id).await?;

        let Some(offspring) = session.offspring.get(index) else {
            return Err(GameError::rule(format!(
                "Offspring index {} is out of range",
                index
            ))
            .into());
        };
        if session.is_claimed(index) {
            return Err(GameError::AlreadyClaimed.into());
        }

        let name = name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| offspring.display_name());
        let template = MonsterTemplate::new(name, offspring.species.clone(), offspring.types.clone())
            .attribute(offspring.attribute.clone())
            .level(1)
            .where_met(WHERE_MET)
            .friendship(OFFSPRING_FRIENDSHIP);

        let monster = MonsterService::new(self.db)
            .create(CreateMonsterParam::new(
                session.trainer_id,
                player_user_id,
                template,
            ))
            .await?;

        let parents = existing_parents(self.db, &session).await?;
        LineageRepository::new(self.db)
            .add(monster.id, &parents)
            .await?;

        let mut claimed = session.claimed.clone();
        claimed.push(index);
        let session = BreedingSessionRepository::new(self.db)
            .update(session.id, &session.offspring, &claimed)
            .await?;

        Ok(OffspringClaim { monster, session })
    }

    /// Breeds the same parents again for one Forget-Me-Not, replacing the
    /// litter and clearing the claims.
    pub async fn reroll(
        &self,
        session_id: i32,
        player_user_id: &str,
    ) -> Result<BreedingSession, AppError> {
        let session = self.get_session(session_id, player_user_id).await?;

        let monster_service = MonsterService::new(self.db);
        let parent1 = monster_service.get(session.parent1_id).await?;
        let parent2 = monster_service.get(session.parent2_id).await?;
        let items = BreedingItems::from_requested(&session.extra_items).map_err(GameError::Rule)?;

        TrainerService::new(self.db)
            .consume(session.trainer_id, &[("berries", FORGET_ME_NOT, 1)])
            .await?;

        let catalogue = SpeciesRepository::new(self.db).catalogue().await?;
        let offspring = breeding::breed(
            &mut rng::fresh(),
            &catalogue,
            &parent1.profile,
            &parent2.profile,
            &items,
        );

        let repo = BreedingSessionRepository::new(self.db);

        Ok(repo.update(session.id, &offspring, &[]).await?)
    }

    /// Deletes sessions created before `cutoff`.
    pub async fn purge_expired(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError> {
        let repo = BreedingSessionRepository::new(self.db);

        Ok(repo.delete_older_than(cutoff).await?)
    }
}

fn ensure_eligible(catalogue: &[Species], monster: &Monster) -> Result<(), GameError> {
    let eligibility = breeding::monster_eligibility(catalogue, &monster.profile.species);
    if eligibility.eligible {
        return Ok(());
    }

    Err(GameError::MonsterNotEligible {
        name: monster.name().to_string(),
        reason: eligibility
            .reason
            .unwrap_or_else(|| "not eligible for breeding".to_string()),
    })
}

/// Parents of a session that still exist; a parent may have been released
/// since the breeding.
async fn existing_parents(
    db: &DatabaseConnection,
    session: &BreedingSession,
) -> Result<Vec<i32>, AppError> {
    let parents = MonsterRepository::new(db)
        .get_by_ids(&[session.parent1_id, session.parent2_id])
        .await?;

    Ok(parents.into_iter().map(|m| m.id).collect())
}
