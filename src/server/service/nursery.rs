use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        nursery::{HatchClaimDto, HatchParams},
        roll::UserSettings,
    },
    server::{
        data::{
            hatch_session::HatchSessionRepository, inventory::InventoryRepository,
            species::SpeciesRepository,
        },
        engine::{
            constants::{EDENWIESS, FORGET_ME_NOT, INCUBATOR, MAX_EGGS_PER_HATCH, STANDARD_EGG},
            hatcher::{self, HatchedEgg},
            rng,
            roller::MonsterRoller,
        },
        error::{game::GameError, AppError},
        model::{
            monster::{CreateMonsterParam, MonsterTemplate},
            nursery::{
                HatchSelection, HatchSession, NewHatchSession, SelectHatchParam, StartHatchParam,
            },
        },
        service::{monster::MonsterService, trainer::TrainerService},
    },
};

const WHERE_MET: &str = "Nursery";

/// Egg hatching sessions.
pub struct NurseryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NurseryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Hatches eggs into a new session.
    ///
    /// Every egg needs a Standard Egg, plus an Incubator unless an image of the
    /// hatching is provided. Nursery items must all be in the inventory. Eggs,
    /// incubators and items are consumed before hatching.
    ///
    /// # Returns
    /// - `Ok(HatchSession)` - The session with every egg's options
    /// - `Err(GameError::Rule)` - Bad egg count, or neither incubator nor image
    /// - `Err(GameError::MissingItem)` - The trainer lacks an egg, incubator or item
    pub async fn start_hatch(&self, param: StartHatchParam) -> Result<HatchSession, AppError> {
        if !(1..=MAX_EGGS_PER_HATCH).contains(&param.egg_count) {
            return Err(GameError::rule(format!(
                "Between 1 and {} eggs can be hatched at once",
                MAX_EGGS_PER_HATCH
            ))
            .into());
        }

        let trainer_service = TrainerService::new(self.db);
        let trainer = trainer_service
            .get_owned(param.trainer_id, &param.player_user_id)
            .await?;
        let egg_count = param.egg_count as i32;

        let has_image = param
            .image_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty());
        if !param.use_incubator && !has_image {
            return Err(
                GameError::rule("Hatching needs an incubator or an image of the hatching").into(),
            );
        }

        let mut required: Vec<(String, String, i32)> =
            vec![("eggs".to_string(), STANDARD_EGG.to_string(), egg_count)];
        if param.use_incubator {
            required.push(("eggs".to_string(), INCUBATOR.to_string(), egg_count));
        }

        let inventory = InventoryRepository::new(self.db);
        for (item_name, quantity) in &param.selected_items {
            if *quantity == 0 {
                continue;
            }
            let stack = inventory
                .find_by_name(trainer.id, item_name)
                .await?
                .ok_or_else(|| GameError::missing_item(item_name.clone()))?;
            required.push((stack.category, stack.item_name, *quantity as i32));
        }

        let borrowed: Vec<(&str, &str, i32)> = required
            .iter()
            .map(|(category, item, quantity)| (category.as_str(), item.as_str(), *quantity))
            .collect();
        trainer_service.consume(trainer.id, &borrowed).await?;

        let params = param.hatch_params();
        let eggs = self.hatch(param.egg_count, &params).await?;

        let repo = HatchSessionRepository::new(self.db);

        Ok(repo
            .create(NewHatchSession {
                player_user_id: param.player_user_id,
                trainer_id: trainer.id,
                params,
                eggs,
            })
            .await?)
    }

    async fn hatch(&self, egg_count: u32, params: &HatchParams) -> Result<Vec<HatchedEgg>, AppError> {
        let catalogue = SpeciesRepository::new(self.db).catalogue().await?;
        let roller = MonsterRoller::new(&catalogue, UserSettings::default());
        let seed = rng::random_seed(&mut rng::fresh());

        Ok(hatcher::hatch(&roller, &seed, egg_count, params))
    }

    /// Gets a session owned by `player_user_id`.
    pub async fn get_session(&self, id: i32, player_user_id: &str) -> Result<HatchSession, AppError> {
        let repo = HatchSessionRepository::new(self.db);

        let session = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Hatch session not found".to_string()))?;
        if session.player_user_id != player_user_id {
            return Err(GameError::NotOwner.into());
        }

        Ok(session)
    }

    /// Turns one option of a hatched egg into a monster.
    ///
    /// Each egg gives one monster. Another pick from the same egg needs
    /// `use_edenwiess` and consumes an Edenwiess berry.
    ///
    /// # Returns
    /// - `Ok(HatchSelection)` - The new monster and the updated session
    /// - `Err(GameError::Rule)` - Unknown egg or option, or a second pick without Edenwiess
    /// - `Err(GameError::AlreadyClaimed)` - The option was picked before
    /// - `Err(GameError::MissingItem)` - No Edenwiess for an extra pick
    pub async fn select(&self, session_id: i32, param: SelectHatchParam) -> Result<HatchSelection, AppError> {
        let session = self.get_session(session_id, &param.player_user_id).await?;

        let egg = session
            .egg(param.egg_id)
            .ok_or_else(|| GameError::rule(format!("Egg {} not found", param.egg_id)))?;
        let rolled = egg.monsters.get(param.option_index).ok_or_else(|| {
            GameError::rule(format!("Option {} not found", param.option_index))
        })?;
        if session.is_claimed(param.egg_id, param.option_index) {
            return Err(GameError::AlreadyClaimed.into());
        }

        if session.claims_for(param.egg_id) > 0 {
            if !param.use_edenwiess {
                return Err(GameError::rule(
                    "This egg already hatched; an Edenwiess is needed for another monster",
                )
                .into());
            }
            TrainerService::new(self.db)
                .consume(session.trainer_id, &[("berries", EDENWIESS, 1)])
                .await?;
        }

        let name = param
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| rolled.display_name());
        let template = MonsterTemplate::new(name, rolled.species.clone(), rolled.types.clone())
            .attribute(rolled.attribute.clone())
            .level(1)
            .where_met(WHERE_MET);

        let monster = MonsterService::new(self.db)
            .create(CreateMonsterParam::new(
                session.trainer_id,
                &param.player_user_id,
                template,
            ))
            .await?;

        let mut claimed = session.claimed.clone();
        claimed.push(HatchClaimDto {
            egg_id: param.egg_id,
            option_index: param.option_index,
        });
        let session = HatchSessionRepository::new(self.db)
            .update(session.id, &session.eggs, &claimed)
            .await?;

        Ok(HatchSelection { monster, session })
    }

    /// Hatches the same number of eggs again with the stored parameters for
    /// one Forget-Me-Not. Claims are reset.
    pub async fn reroll(&self, session_id: i32, player_user_id: &str) -> Result<HatchSession, AppError> {
        let session = self.get_session(session_id, player_user_id).await?;

        TrainerService::new(self.db)
            .consume(session.trainer_id, &[("berries", FORGET_ME_NOT, 1)])
            .await?;

        let eggs = self
            .hatch(session.eggs.len() as u32, &session.params)
            .await?;

        let repo = HatchSessionRepository::new(self.db);

        Ok(repo.update(session.id, &eggs, &[]).await?)
    }

    pub async fn purge_expired(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError> {
        let repo = HatchSessionRepository::new(self.db);

        Ok(repo.delete_older_than(cutoff).await?)
    }
}
