//! Encounter generation and wild captures.

use sea_orm::DatabaseConnection;

use crate::{
    model::{encounter::EncounterLocation, roll::UserSettings},
    server::{
        data::{
            capture::CaptureRepository, encounter::EncounterRepository,
            species::SpeciesRepository, trainer::TrainerRepository,
        },
        engine::{capture, constants::POKEPUFF, encounter, rng, roller::MonsterRoller},
        error::{game::GameError, AppError},
        model::{
            encounter::{CaptureOutcome, CaptureParam, Encounter, EncounterKind},
            monster::{CreateMonsterParam, MonsterTemplate},
        },
        service::{monster::MonsterService, trainer::TrainerService},
    },
};

const WHERE_MET: &str = "Wild Capture";

pub struct EncounterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EncounterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Generates and stores an encounter at a location.
    ///
    /// # Arguments
    /// - `kind` - Forced encounter kind, or `None` for a weighted roll
    /// - `location` - Roll filters plus level and agro ranges
    /// - `settings` - The player's roller preferences
    /// - `seed` - Seed for a reproducible encounter
    pub async fn generate(
        &self,
        kind: Option<EncounterKind>,
        location: EncounterLocation,
        settings: UserSettings,
        seed: Option<String>,
    ) -> Result<Encounter, AppError> {
        let catalogue = SpeciesRepository::new(self.db).catalogue().await?;
        let roller = MonsterRoller::new(&catalogue, settings);

        let mut rng = match seed {
            Some(seed) => rng::seeded(&seed),
            None => rng::fresh(),
        };
        let plan = encounter::generate(&mut rng, &roller, &location, kind);

        let repo = EncounterRepository::new(self.db);

        Ok(repo.create(plan).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Encounter, AppError> {
        let repo = EncounterRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Encounter not found".to_string()))
    }

    /// Throws a ball at a wild group.
    ///
    /// The ball and any Pokepuffs are used up whether or not the capture works.
    /// A caught monster goes to the named trainer at a random level 5-14.
    ///
    /// # Returns
    /// - `Ok(CaptureOutcome)` - The throw's chance and result
    /// - `Err(AppError::NotFound)` - Unknown encounter, or no trainer with that name
    /// - `Err(GameError::Rule)` - Not a wild encounter, unknown ball, bad group, or the
    ///   group has nothing left for this player
    /// - `Err(GameError::MissingItem)` - The trainer lacks the ball or the Pokepuffs
    pub async fn capture(&self, param: CaptureParam) -> Result<CaptureOutcome, AppError> {
        let encounter = self.get(param.encounter_id).await?;
        if encounter.kind != EncounterKind::Wild {
            return Err(GameError::rule("Only wild encounters can be captured from").into());
        }

        let trainer = TrainerRepository::new(self.db)
            .find_by_name_for_player(&param.player_user_id, &param.trainer_name)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("You have no trainer named {}", param.trainer_name))
            })?;

        let ball = capture::normalize_ball(&param.ball)
            .ok_or_else(|| GameError::rule(format!("{} is not a known ball", param.ball)))?;

        let group = param
            .group_index
            .checked_sub(1)
            .and_then(|i| encounter.groups.get(i))
            .ok_or_else(|| {
                GameError::rule(format!(
                    "Group must be between 1 and {}",
                    encounter.groups.len()
                ))
            })?;

        let captures = CaptureRepository::new(self.db);
        let captured = captures
            .count_for_player(group.id, &param.player_user_id)
            .await? as i32;
        let remaining = group.count - captured;
        if remaining <= 0 {
            return Err(GameError::rule(format!(
                "There are no {} left for you to catch",
                group.display_name()
            ))
            .into());
        }

        let mut items = vec![("balls", ball, 1)];
        if param.pokepuffs > 0 {
            items.push(("items", POKEPUFF, param.pokepuffs as i32));
        }
        TrainerService::new(self.db).consume(trainer.id, &items).await?;

        // the caught monster's level is rolled up front and drives the odds
        let mut rng = rng::fresh();
        let level = capture::wild_level(&mut rng);
        let chance = capture::capture_chance(
            &mut rng,
            capture::catch_rate(ball),
            param.pokepuffs,
            level,
            false,
        );

        if !capture::attempt(&mut rng, chance) {
            return Ok(CaptureOutcome {
                success: false,
                chance,
                ball: ball.to_string(),
                remaining,
                monster: None,
                message: format!("Oh no! The wild {} broke free!", group.display_name()),
            });
        }

        let template =
            MonsterTemplate::new(group.display_name(), group.species.clone(), group.types.clone())
                .attribute(group.attribute.clone())
                .level(level)
                .where_met(WHERE_MET);
        let monster = MonsterService::new(self.db)
            .create(CreateMonsterParam::new(
                trainer.id,
                &param.player_user_id,
                template,
            ))
            .await?;

        captures
            .create(encounter.id, group.id, &param.player_user_id, monster.id)
            .await?;

        tracing::info!(
            "{} captured {} (monster {}) from encounter {}",
            trainer.name,
            group.display_name(),
            monster.id,
            encounter.id
        );

        Ok(CaptureOutcome {
            success: true,
            chance,
            ball: ball.to_string(),
            remaining: remaining - 1,
            message: format!(
                "Gotcha! {} caught the wild {}!",
                trainer.name,
                group.display_name()
            ),
            monster: Some(monster),
        })
    }
}
