use sea_orm::DatabaseConnection;

use crate::server::{
    data::submission::SubmissionRepository,
    engine::{reward, rng},
    error::{game::GameError, AppError},
    model::submission::{
        AppliedMonster, AppliedRewards, ArtSubmission, ExternalArtSubmission, MonsterEntry,
        Submission, SubmissionInput, SubmissionRewards, TrainerEntry, WritingSubmission,
    },
    service::{boss::BossService, monster::MonsterService, trainer::TrainerService},
};

/// Art and writing submissions turned into levels, coins and boss damage.
pub struct SubmissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubmissionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Calculates the rewards for an art submission without applying them.
    ///
    /// # Returns
    /// - `Ok(SubmissionRewards)` - Per-character levels, coins and bonus rolls
    /// - `Err(AppError::BadRequest)` - Unknown quality
    /// - `Err(AppError::NotFound)` - Unknown trainer or monster
    pub async fn art_rewards(
        &self,
        player_user_id: &str,
        mut submission: ArtSubmission,
    ) -> Result<SubmissionRewards, AppError> {
        self.resolve_trainers(player_user_id, &mut submission.trainers)
            .await?;
        self.resolve_monsters(player_user_id, &mut submission.monsters)
            .await?;

        reward::art(&mut rng::fresh(), &submission).map_err(AppError::BadRequest)
    }

    /// Calculates the rewards for a writing submission without applying them.
    ///
    /// # Returns
    /// - `Ok(SubmissionRewards)` - Levels and coins split between participants
    /// - `Err(GameError::Rule)` - Nobody takes part in the submission
    /// - `Err(AppError::NotFound)` - Unknown trainer or monster
    pub async fn writing_rewards(
        &self,
        player_user_id: &str,
        mut submission: WritingSubmission,
    ) -> Result<SubmissionRewards, AppError> {
        self.resolve_trainers(player_user_id, &mut submission.trainers)
            .await?;
        self.resolve_monsters(player_user_id, &mut submission.monsters)
            .await?;

        Ok(reward::writing(&mut rng::fresh(), &submission).map_err(GameError::Rule)?)
    }

    pub fn external_art_rewards(
        &self,
        submission: &ExternalArtSubmission,
    ) -> Result<SubmissionRewards, AppError> {
        reward::external_art(&mut rng::fresh(), submission).map_err(AppError::BadRequest)
    }

    pub fn external_writing_rewards(&self, word_count: i32) -> Result<SubmissionRewards, AppError> {
        if word_count < 0 {
            return Err(AppError::BadRequest(
                "Word count can't be negative".to_string(),
            ));
        }

        Ok(reward::external_writing(&mut rng::fresh(), word_count))
    }

    /// Calculates the rewards of a submission, stores it and hands the
    /// rewards out.
    ///
    /// Rewards always come from the submitted work. Only trainers and
    /// monsters the player owns are credited; levels for other players'
    /// characters stay gifts. Trainer levels and coins are credited directly.
    /// Monster levels go through the level-up so moves are learned; monster
    /// coins go to the monster's trainer. Levels lost to the level cap are
    /// dropped. The boss damage roll hits the active boss when there is one.
    ///
    /// # Returns
    /// - `Ok(AppliedRewards)` - What actually changed
    /// - `Err(AppError::BadRequest)` - Blank title or an invalid submission
    /// - `Err(AppError::NotFound)` - Unknown trainer or monster
    pub async fn apply(
        &self,
        player_user_id: &str,
        input: SubmissionInput,
        title: String,
    ) -> Result<AppliedRewards, AppError> {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::BadRequest("Submission title is required".to_string()));
        }

        let kind = input.kind();
        let rewards = match input {
            SubmissionInput::Art(art) => self.art_rewards(player_user_id, art).await?,
            SubmissionInput::Writing(writing) => {
                self.writing_rewards(player_user_id, writing).await?
            }
            SubmissionInput::ExternalArt(art) => self.external_art_rewards(&art)?,
            SubmissionInput::ExternalWriting { word_count } => {
                self.external_writing_rewards(word_count)?
            }
        };

        let submission = SubmissionRepository::new(self.db)
            .create(player_user_id, kind, title, rewards.clone())
            .await?;

        let trainer_service = TrainerService::new(self.db);
        for t in rewards.trainers.iter().filter(|t| t.is_owned) {
            if t.levels > 0 {
                trainer_service.add_levels(t.trainer_id, t.levels).await?;
            }
            if t.coins > 0 {
                trainer_service.add_coins(t.trainer_id, t.coins).await?;
            }
        }

        let monster_service = MonsterService::new(self.db);
        let mut monsters = Vec::with_capacity(rewards.monsters.len());
        for m in rewards.monsters.iter().filter(|m| m.is_owned) {
            let monster = monster_service.get(m.monster_id).await?;
            if m.coins > 0 {
                trainer_service.add_coins(monster.trainer_id, m.coins).await?;
            }
            if m.levels <= 0 {
                continue;
            }

            let leveled = monster_service.add_levels(monster.id, m.levels).await?;
            monsters.push(AppliedMonster {
                monster_id: monster.id,
                old_level: leveled.old_level,
                new_level: leveled.new_level,
                learned_moves: leveled.learned_moves,
            });
        }

        let boss_damage = self
            .hit_boss(player_user_id, rewards.bonus.boss_damage, submission.id)
            .await?;

        tracing::info!(
            "Applied {} submission {} for {}: {} trainers, {} monsters, {} boss damage",
            kind.as_str(),
            submission.id,
            player_user_id,
            rewards.trainers.len(),
            monsters.len(),
            boss_damage
        );

        Ok(AppliedRewards {
            submission_id: submission.id,
            capped_levels: rewards.capped_levels(),
            trainers: rewards.trainers,
            monsters,
            boss_damage,
            gift_levels: rewards.gift_levels,
            gift_items: rewards.gift_items,
        })
    }

    pub async fn get(&self, id: i32) -> Result<Submission, AppError> {
        let repo = SubmissionRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))
    }

    pub async fn list_by_player(&self, player_user_id: &str) -> Result<Vec<Submission>, AppError> {
        let repo = SubmissionRepository::new(self.db);

        Ok(repo.get_by_player(player_user_id).await?)
    }

    /// Damage dealt to the active boss, 0 when no boss is up.
    async fn hit_boss(
        &self,
        player_user_id: &str,
        amount: i32,
        submission_id: i32,
    ) -> Result<i32, AppError> {
        if amount <= 0 {
            return Ok(0);
        }

        match BossService::new(self.db)
            .add_damage(player_user_id, amount, Some(submission_id))
            .await
        {
            Ok(result) => Ok(result.damage_dealt),
            Err(AppError::NotFound(_)) => Ok(0),
            Err(e) => Err(e),
        }
    }

    async fn resolve_trainers(
        &self,
        player_user_id: &str,
        entries: &mut [TrainerEntry],
    ) -> Result<(), AppError> {
        let service = TrainerService::new(self.db);
        for entry in entries {
            let trainer = service.get(entry.trainer_id).await?;
            entry.is_owned = trainer.player_user_id == player_user_id;
        }

        Ok(())
    }

    async fn resolve_monsters(
        &self,
        player_user_id: &str,
        entries: &mut [MonsterEntry],
    ) -> Result<(), AppError> {
        let service = MonsterService::new(self.db);
        for entry in entries {
            let monster = service.get(entry.monster_id).await?;
            entry.trainer_id = Some(monster.trainer_id);
            entry.is_owned = monster.player_user_id == player_user_id;
            entry.current_level = Some(monster.level());
        }

        Ok(())
    }
}
