//! Turns of NPC trainers and wild groups.

use rand::{rngs::StdRng, seq::IndexedRandom};
use serde_json::json;

use crate::server::{
    data::{battle::participant::ParticipantRepository, monster_move::MoveRepository},
    error::AppError,
    model::{
        battle::{BattleMonster, BattleReward, BattleState, Participant},
        catalogue::Move,
    },
};

use super::{Action, BattleService};

impl<'a> BattleService<'a> {
    /// Plays AI participants until a player is up or the battle ends.
    ///
    /// At most one round of participants is played per call.
    ///
    /// # Returns
    /// - `Ok(Some(Vec<BattleReward>))` - The battle ended during the AI turns
    /// - `Ok(None)` - A player is up next
    pub async fn process_current_turn(
        &self,
        rng: &mut StdRng,
        battle_id: i32,
        messages: &mut Vec<String>,
    ) -> Result<Option<Vec<BattleReward>>, AppError> {
        let bound = ParticipantRepository::new(self.db).count(battle_id).await?;

        for _ in 0..bound {
            let state = self.state(battle_id).await?;
            if !state.battle.is_active() {
                return Ok(Some(Vec::new()));
            }
            let Some(current) = state.current_participant().cloned() else {
                break;
            };
            if !current.is_ai() {
                break;
            }

            self.ai_turn(rng, &state, &current, messages).await?;

            if let Some(rewards) = self.check_outcome(battle_id, messages).await? {
                return Ok(Some(rewards));
            }
            self.advance_turn(battle_id).await?;
        }

        Ok(None)
    }

    /// A random monster on the field attacks a random opposing monster with
    /// one of its damaging moves, or Tackle.
    async fn ai_turn(
        &self,
        rng: &mut StdRng,
        state: &BattleState,
        participant: &Participant,
        messages: &mut Vec<String>,
    ) -> Result<(), AppError> {
        let fighters: Vec<&BattleMonster> = state
            .monsters_of(participant.id)
            .into_iter()
            .filter(|m| m.can_fight())
            .collect();
        let Some(attacker) = fighters.choose(rng) else {
            return Ok(());
        };
        let mut attacker = (*attacker).clone();

        let (can_act, mut lines) = self.process_status(rng, &mut attacker).await?;
        let targets = state.targets_on(participant.side.opposite());

        let mut damage_dealt = 0;
        let mut move_name = None;
        if can_act {
            if let Some(target) = targets.choose(rng) {
                let mv = self.pick_ai_move(rng, &attacker).await?;
                let strike = self
                    .strike(rng, state, &mut attacker, Some(target.id), &mv)
                    .await?;
                damage_dealt = strike.damage;
                move_name = Some(mv.name);
                lines.extend(strike.lines);
            }
        }

        self.record_turn(
            state,
            participant,
            Action {
                kind: "attack",
                battle_monster_id: Some(attacker.id),
                data: json!({ "move": move_name, "prevented": !can_act }),
                damage_dealt,
                message: "",
            },
        )
        .await?;
        self.log_action(state, participant.id, &lines).await?;
        messages.extend(lines);

        Ok(())
    }

    async fn pick_ai_move(&self, rng: &mut StdRng, attacker: &BattleMonster) -> Result<Move, AppError> {
        let repo = MoveRepository::new(self.db);

        let mut damaging = Vec::new();
        for name in &attacker.moves {
            if let Some(mv) = repo.get_by_name(name).await? {
                if mv.is_damaging() {
                    damaging.push(mv);
                }
            }
        }

        Ok(damaging.choose(rng).cloned().unwrap_or_else(Move::tackle))
    }
}
