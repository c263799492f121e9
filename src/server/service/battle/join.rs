//! Extra players joining a battle, and PvP battles.

use crate::server::{
    data::{
        battle::{participant::ParticipantRepository, BattleRepository},
        monster::MonsterRepository,
    },
    engine::constants::DEFAULT_KNOCKOUT_LIMIT,
    error::{game::GameError, AppError},
    model::battle::{ActionResult, BattleType, LogType, NewParticipant, TeamSide},
    service::trainer::TrainerService,
};

use super::BattleService;

/// Monsters each PvP opponent brings, lowest IDs first.
const PVP_TEAM_SIZE: usize = 6;

impl<'a> BattleService<'a> {
    /// Adds the player's trainer to the players side of a running battle. The
    /// newcomer acts after everyone already in it.
    ///
    /// # Returns
    /// - `Ok(ActionResult)` - The join line and the battle state
    /// - `Err(GameError::BattleNotActive)` - The battle has ended
    /// - `Err(GameError::Rule)` - The player is already in the battle
    pub async fn join(
        &self,
        battle_id: i32,
        player_user_id: &str,
        trainer_id: i32,
        monster_ids: &[i32],
    ) -> Result<ActionResult, AppError> {
        let state = self.active_state(battle_id).await?;
        if state.participant_for_player(player_user_id).is_some() {
            return Err(GameError::rule("You are already in this battle").into());
        }

        let trainer = TrainerService::new(self.db)
            .get_owned(trainer_id, player_user_id)
            .await?;
        let team = self.team(trainer.id, monster_ids).await?;

        let participant = ParticipantRepository::new(self.db)
            .create(NewParticipant::player(
                battle_id,
                TeamSide::Players,
                trainer.id,
                player_user_id,
                trainer.name.clone(),
                state.participants.len() as i32,
            ))
            .await?;
        self.field_monsters(battle_id, participant.id, &team).await?;

        let line = format!("{} joined the battle!", trainer.name);
        self.log(&state, Some(participant.id), LogType::System, line.clone())
            .await?;

        Ok(ActionResult {
            messages: vec![line],
            captured: None,
            rewards: Vec::new(),
            state: self.state(battle_id).await?,
        })
    }

    /// Starts a battle between the challenger and other players' trainers.
    ///
    /// The challenger acts first. Each opponent fields their first six
    /// monsters.
    ///
    /// # Returns
    /// - `Ok(ActionResult)` - The challenge line and the new battle
    /// - `Err(AppError::NotFound)` - Unknown trainer or monster
    /// - `Err(GameError::Rule)` - No opponents, or the challenger among them
    pub async fn start_pvp(
        &self,
        player_user_id: &str,
        trainer_id: i32,
        monster_ids: &[i32],
        opponent_trainer_ids: &[i32],
    ) -> Result<ActionResult, AppError> {
        if opponent_trainer_ids.is_empty() {
            return Err(GameError::rule("A PvP battle needs at least one opponent").into());
        }

        let trainer_service = TrainerService::new(self.db);
        let challenger = trainer_service
            .get_owned(trainer_id, player_user_id)
            .await?;
        if opponent_trainer_ids.contains(&challenger.id) {
            return Err(GameError::rule("A trainer can't battle itself").into());
        }
        let team = self.team(challenger.id, monster_ids).await?;

        let monster_repo = MonsterRepository::new(self.db);
        let mut opponents = Vec::with_capacity(opponent_trainer_ids.len());
        for id in opponent_trainer_ids {
            let opponent = trainer_service.get(*id).await?;
            let mut monsters = monster_repo.get_by_trainer(opponent.id).await?;
            monsters.truncate(PVP_TEAM_SIZE);
            opponents.push((opponent, monsters));
        }

        let battle = BattleRepository::new(self.db)
            .create(None, BattleType::Pvp, DEFAULT_KNOCKOUT_LIMIT)
            .await?;
        let participants = ParticipantRepository::new(self.db);

        let player = participants
            .create(NewParticipant::player(
                battle.id,
                TeamSide::Players,
                challenger.id,
                player_user_id,
                challenger.name.clone(),
                0,
            ))
            .await?;
        self.field_monsters(battle.id, player.id, &team).await?;

        for (i, (opponent, monsters)) in opponents.iter().enumerate() {
            let participant = participants
                .create(NewParticipant::player(
                    battle.id,
                    TeamSide::Opponents,
                    opponent.id,
                    opponent.player_user_id.clone(),
                    opponent.name.clone(),
                    i as i32 + 1,
                ))
                .await?;
            self.field_monsters(battle.id, participant.id, monsters)
                .await?;
        }

        let names: Vec<&str> = opponents.iter().map(|(t, _)| t.name.as_str()).collect();
        let line = format!("{} challenged {} to a battle!", challenger.name, names.join(", "));

        let state = self.state(battle.id).await?;
        self.log(&state, None, LogType::System, line.clone()).await?;

        tracing::info!(
            "{} started PvP battle {} against {}",
            challenger.name,
            battle.id,
            names.join(", ")
        );

        Ok(ActionResult {
            messages: vec![line],
            captured: None,
            rewards: Vec::new(),
            state,
        })
    }
}
