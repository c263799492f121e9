use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::roll::{RollParams, UserSettings},
    server::{
        data::{
            boss::{damage::BossDamageRepository, reward_claim::BossRewardClaimRepository, BossRepository},
            species::SpeciesRepository,
        },
        engine::{rng, roller::MonsterRoller},
        error::{game::GameError, AppError},
        model::{
            boss::{
                Boss, BossDamageResult, BossRewardClaim, BossRewardResult, BossStats, CreateBossParam,
                LeaderboardEntry, TOP_REWARD,
            },
            monster::{CreateMonsterParam, MonsterTemplate},
        },
        service::{monster::MonsterService, trainer::TrainerService},
    },
};

const WHERE_MET: &str = "Boss Reward";
const TOP_REWARD_LEVEL: i32 = 10;
const GRUNT_REWARD_LEVEL: i32 = 5;
const FALLBACK_SPECIES: &str = "Pikachu";
const FALLBACK_TYPE: &str = "Electric";

/// Monthly bosses fought with submissions.
pub struct BossService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BossService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an active boss at full HP.
    pub async fn create(&self, param: CreateBossParam) -> Result<Boss, AppError> {
        if param.name.trim().is_empty() {
            return Err(AppError::BadRequest("Boss name is required".to_string()));
        }
        if param.total_hp <= 0 {
            return Err(AppError::BadRequest(
                "Boss HP must be at least 1".to_string(),
            ));
        }

        let repo = BossRepository::new(self.db);

        let boss = repo.create(param).await?;
        tracing::info!("Boss {} created with {} HP", boss.name, boss.total_hp);

        Ok(boss)
    }

    pub async fn get(&self, id: i32) -> Result<Boss, AppError> {
        let repo = BossRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Boss not found".to_string()))
    }

    /// The newest boss that has not been defeated.
    pub async fn active(&self) -> Result<Boss, AppError> {
        let repo = BossRepository::new(self.db);

        repo.get_active()
            .await?
            .ok_or_else(|| AppError::NotFound("There is no active boss".to_string()))
    }

    pub async fn defeated(&self) -> Result<Vec<Boss>, AppError> {
        let repo = BossRepository::new(self.db);

        Ok(repo.get_defeated().await?)
    }

    /// Damage totals and the leaderboard of a boss.
    ///
    /// # Arguments
    /// - `boss_id` - Boss to report on
    /// - `player_user_id` - Player whose own damage is included, if any
    /// - `limit` - Maximum leaderboard entries
    pub async fn stats(
        &self,
        boss_id: i32,
        player_user_id: Option<&str>,
        limit: Option<u64>,
    ) -> Result<BossStats, AppError> {
        let boss = self.get(boss_id).await?;
        let damage = BossDamageRepository::new(self.db);

        let player_damage = match player_user_id {
            Some(player) => Some(damage.player_damage(boss.id, player).await?),
            None => None,
        };

        Ok(BossStats {
            total_damage: damage.total_damage(boss.id).await?,
            participant_count: damage.participant_count(boss.id).await?,
            player_damage,
            leaderboard: damage.leaderboard(boss.id, limit).await?,
            boss,
        })
    }

    pub async fn leaderboard(
        &self,
        boss_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<LeaderboardEntry>, AppError> {
        let boss = self.get(boss_id).await?;
        let repo = BossDamageRepository::new(self.db);

        Ok(repo.leaderboard(boss.id, limit).await?)
    }

    /// Hits the active boss.
    ///
    /// When the boss reaches 0 HP it is defeated and every player who damaged
    /// it gets a reward to claim: the top damage dealer a reward monster, the
    /// rest a grunt monster. Only the hit that defeats the boss hands out
    /// rewards.
    ///
    /// # Returns
    /// - `Ok(BossDamageResult)` - The boss after the hit
    /// - `Err(AppError::BadRequest)` - `amount` is not positive
    /// - `Err(AppError::NotFound)` - There is no active boss
    pub async fn add_damage(
        &self,
        player_user_id: &str,
        amount: i32,
        submission_id: Option<i32>,
    ) -> Result<BossDamageResult, AppError> {
        if amount <= 0 {
            return Err(AppError::BadRequest(
                "Damage must be at least 1".to_string(),
            ));
        }

        let boss = self.active().await?;

        let txn = self.db.begin().await?;
        let (boss, defeated) = match BossRepository::new(&txn).apply_damage(boss.id, amount).await {
            Ok(hit) => hit,
            // defeated by another hit since it was looked up
            Err(DbErr::RecordNotFound(_)) => {
                return Err(AppError::NotFound("There is no active boss".to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        let damage = BossDamageRepository::new(&txn);
        damage
            .create(boss.id, player_user_id, amount, submission_id)
            .await?;

        if defeated {
            let leaderboard = damage.leaderboard(boss.id, None).await?;
            BossRewardClaimRepository::new(&txn)
                .create_for_leaderboard(boss.id, &leaderboard)
                .await?;

            tracing::info!(
                "Boss {} defeated, {} players earned rewards",
                boss.name,
                leaderboard.len()
            );
        }
        txn.commit().await?;

        Ok(BossDamageResult {
            boss,
            damage_dealt: amount,
            defeated,
        })
    }

    pub async fn unclaimed_rewards(&self, player_user_id: &str) -> Result<Vec<BossRewardClaim>, AppError> {
        let repo = BossRewardClaimRepository::new(self.db);

        Ok(repo.get_unclaimed(player_user_id).await?)
    }

    /// Claims a player's reward for a defeated boss as a new monster.
    ///
    /// The reward monster can be any species at level 10; a grunt monster is
    /// never legendary or mythical and starts at level 5.
    ///
    /// # Returns
    /// - `Ok(BossRewardResult)` - The claimed reward and the new monster
    /// - `Err(AppError::NotFound)` - The player has no reward for this boss
    /// - `Err(AppError::BadRequest)` - Empty monster name
    /// - `Err(GameError::AlreadyClaimed)` - The reward was claimed before
    /// - `Err(GameError::NotOwner)` - The trainer belongs to another player
    pub async fn claim_reward(
        &self,
        boss_id: i32,
        player_user_id: &str,
        monster_name: &str,
        trainer_id: i32,
    ) -> Result<BossRewardResult, AppError> {
        let claims = BossRewardClaimRepository::new(self.db);
        let claim = claims
            .get(boss_id, player_user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("You have no reward for this boss".to_string()))?;
        if claim.is_claimed {
            return Err(GameError::AlreadyClaimed.into());
        }

        let monster_name = monster_name.trim();
        if monster_name.is_empty() {
            return Err(AppError::BadRequest("Monster name is required".to_string()));
        }
        let trainer = TrainerService::new(self.db)
            .get_owned(trainer_id, player_user_id)
            .await?;

        let top = claim.reward_type == TOP_REWARD;
        let params = if top {
            RollParams::default()
        } else {
            RollParams {
                legendary: Some(false),
                mythical: Some(false),
                ..Default::default()
            }
        };
        let catalogue = SpeciesRepository::new(self.db).catalogue().await?;
        let rolled = MonsterRoller::new(&catalogue, UserSettings::default())
            .roll_one(&mut rng::fresh(), &params);

        let (species, types, attribute) = match rolled {
            Some(rolled) => (rolled.species, rolled.types, rolled.attribute),
            None => (
                vec![FALLBACK_SPECIES.to_string()],
                vec![FALLBACK_TYPE.to_string()],
                None,
            ),
        };
        let level = if top { TOP_REWARD_LEVEL } else { GRUNT_REWARD_LEVEL };
        let template = MonsterTemplate::new(monster_name, species, types)
            .attribute(attribute)
            .level(level)
            .where_met(WHERE_MET);

        let monster = MonsterService::new(self.db)
            .create(CreateMonsterParam::new(trainer.id, player_user_id, template))
            .await?;
        let claim = claims
            .mark_claimed(claim.id, monster_name.to_string(), trainer.id)
            .await?;

        tracing::info!(
            "{} claimed {} from boss {} as {}",
            trainer.name,
            claim.reward_type,
            boss_id,
            monster_name
        );

        Ok(BossRewardResult { claim, monster })
    }
}
