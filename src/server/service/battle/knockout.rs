//! Knockouts and win conditions.

use crate::server::{
    engine::battle::{self, SideTally},
    error::AppError,
    model::battle::{BattleMonster, BattleReward, BattleState, LogType, Participant, TeamSide},
    service::monster::MonsterService,
};

use super::BattleService;

impl<'a> BattleService<'a> {
    /// Handles a monster that just fainted.
    ///
    /// Every alive stored monster of the opposing players gains
    /// `1 + level / 10` levels. An AI participant sends out its next monster.
    /// The lines are logged and appended to `lines`.
    pub(super) async fn knockout(
        &self,
        fainted: &BattleMonster,
        lines: &mut Vec<String>,
    ) -> Result<(), AppError> {
        let state = self.state(fainted.battle_id).await?;
        let mut knockout_lines = vec![format!("**{}** was knocked out!", fainted.name)];

        let Some(owner) = state.participant(fainted.participant_id).cloned() else {
            lines.extend(knockout_lines);
            return Ok(());
        };

        let levels = battle::knockout_levels(fainted.level);
        let monster_service = MonsterService::new(self.db);
        let winners = state
            .participants
            .iter()
            .filter(|p| p.side != owner.side && !p.is_ai());
        for participant in winners {
            for monster in state.monsters_of(participant.id) {
                let Some(monster_id) = monster.monster_id.filter(|_| monster.is_alive()) else {
                    continue;
                };
                match monster_service.add_levels(monster_id, levels).await {
                    Ok(result) => knockout_lines.extend(result.messages),
                    // released since it entered the battle
                    Err(AppError::NotFound(_)) => continue,
                    Err(e) => return Err(e),
                }
            }
        }

        if owner.is_ai() {
            self.send_next(&state, &owner, fainted.id, &mut knockout_lines)
                .await?;
        }

        self.log(&state, None, LogType::System, knockout_lines.join("\n"))
            .await?;
        lines.extend(knockout_lines);

        Ok(())
    }

    /// Puts an AI participant's next alive monster on the field after
    /// `removed_id` left it.
    pub(super) async fn send_next(
        &self,
        state: &BattleState,
        owner: &Participant,
        removed_id: i32,
        lines: &mut Vec<String>,
    ) -> Result<(), AppError> {
        let others: Vec<&BattleMonster> = state
            .monsters_of(owner.id)
            .into_iter()
            .filter(|m| m.id != removed_id && m.is_alive())
            .collect();

        if others.iter().any(|m| m.is_active) {
            return Ok(());
        }

        match others.first() {
            Some(next) => {
                let mut next = (*next).clone();
                next.is_active = true;
                self.save_monster(&next).await?;
                lines.push(format!("{} sent out **{}**!", owner.trainer_name, next.name));
            }
            None => lines.push(format!("{} has no more monsters left!", owner.trainer_name)),
        }

        Ok(())
    }

    /// Ends the battle when a win condition is met.
    ///
    /// # Returns
    /// - `Ok(Some(Vec<BattleReward>))` - The battle is over; the rewards are
    ///   empty when it had ended before
    /// - `Ok(None)` - The battle goes on
    pub(super) async fn check_outcome(
        &self,
        battle_id: i32,
        messages: &mut Vec<String>,
    ) -> Result<Option<Vec<BattleReward>>, AppError> {
        let state = self.state(battle_id).await?;
        if !state.battle.is_active() {
            return Ok(Some(Vec::new()));
        }

        let Some(outcome) = battle::check_conditions(
            tally(&state, TeamSide::Players),
            tally(&state, TeamSide::Opponents),
            state.battle.knockout_limit,
        ) else {
            return Ok(None);
        };

        messages.push(outcome.reason.clone());
        let rewards = self
            .end_battle(battle_id, outcome.winner, &outcome.reason)
            .await?;

        Ok(Some(rewards))
    }
}

fn tally(state: &BattleState, side: TeamSide) -> SideTally {
    SideTally::count(state.monsters_on(side).iter().map(|m| !m.is_alive()))
}
