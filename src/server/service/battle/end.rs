//! Ending battles and paying out rewards.

use crate::server::{
    data::battle::BattleRepository,
    engine::battle,
    error::{game::GameError, AppError},
    model::battle::{ActionResult, BattleReward, BattleType, LogType, TeamSide, Winner},
    service::trainer::TrainerService,
};

use super::{player_participant, BattleService};

impl<'a> BattleService<'a> {
    /// Completes a battle and pays every player participant.
    ///
    /// Experience and coins grow with the words written during the battle and
    /// the winning side earns more. Coins are credited to the trainer.
    ///
    /// # Returns
    /// - `Ok(Vec<BattleReward>)` - One reward per player participant
    /// - `Err(AppError::NotFound)` - No battle with that ID
    /// - `Err(GameError::BattleNotActive)` - The battle has already ended
    pub async fn end_battle(
        &self,
        battle_id: i32,
        winner: Winner,
        reason: &str,
    ) -> Result<Vec<BattleReward>, AppError> {
        let state = self.active_state(battle_id).await?;

        BattleRepository::new(self.db)
            .complete(battle_id, winner)
            .await?;
        self.log(
            &state,
            None,
            LogType::System,
            format!(
                "BATTLE ENDED! Winner: {}. {}",
                winner.as_str().to_uppercase(),
                reason
            ),
        )
        .await?;

        let trainer_service = TrainerService::new(self.db);
        let mut rewards = Vec::new();
        for participant in state.participants.iter().filter(|p| !p.is_ai()) {
            let Some(trainer_id) = participant.trainer_id else {
                continue;
            };

            let won = winner.is_side(participant.side);
            let (experience, coins) = battle::rewards(participant.word_count, won);
            match trainer_service.add_coins(trainer_id, coins).await {
                Ok(_) => {}
                // the trainer was deleted mid-battle
                Err(AppError::NotFound(_)) => continue,
                Err(e) => return Err(e),
            }

            rewards.push(BattleReward {
                participant_id: participant.id,
                trainer_id,
                experience,
                coins,
            });
        }

        tracing::info!(
            "Battle {} ended, winner {}: {}",
            battle_id,
            winner.as_str(),
            reason
        );

        Ok(rewards)
    }

    /// Gives the battle to the other side.
    pub async fn forfeit(&self, battle_id: i32, player_user_id: &str) -> Result<ActionResult, AppError> {
        let state = self.state(battle_id).await?;
        let participant = player_participant(&state, player_user_id)?;

        let reason = format!("{} forfeited the battle.", participant.trainer_name);
        let winner = Winner::Side(participant.side.opposite());

        self.ended(battle_id, winner, reason).await
    }

    /// Runs from a wild battle. The wild side wins.
    ///
    /// # Returns
    /// - `Ok(ActionResult)` - The ended battle
    /// - `Err(GameError::Rule)` - Not a wild battle
    pub async fn flee(&self, battle_id: i32, player_user_id: &str) -> Result<ActionResult, AppError> {
        let state = self.state(battle_id).await?;
        let participant = player_participant(&state, player_user_id)?;
        if state.battle.battle_type != BattleType::Wild {
            return Err(GameError::rule("You can only flee from wild battles").into());
        }

        let reason = format!("{} fled from the battle!", participant.trainer_name);

        self.ended(battle_id, Winner::Side(TeamSide::Opponents), reason)
            .await
    }

    /// Ends a battle regardless of its state.
    pub async fn force_end(
        &self,
        battle_id: i32,
        winner: Winner,
        message: Option<String>,
    ) -> Result<ActionResult, AppError> {
        let reason = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "The battle was ended by an admin.".to_string());

        self.ended(battle_id, winner, reason).await
    }

    async fn ended(&self, battle_id: i32, winner: Winner, reason: String) -> Result<ActionResult, AppError> {
        let rewards = self.end_battle(battle_id, winner, &reason).await?;
        let state = self.state(battle_id).await?;

        Ok(ActionResult {
            messages: vec![reason],
            captured: None,
            rewards,
            state,
        })
    }
}
