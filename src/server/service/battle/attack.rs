//! Attacks.
//!
//! A player attack checks the turn, the attacker, the move and the target
//! before anything changes. The strike itself is shared with the AI.

use rand::rngs::StdRng;
use serde_json::json;

use crate::server::{
    data::monster_move::MoveRepository,
    engine::{
        battle::{self, StatusMoveEffect},
        constants::FALLBACK_MOVE,
        damage, rng, status,
    },
    error::{game::GameError, AppError},
    model::{
        battle::{ActionResult, AttackParam, BattleMonster, BattleState},
        catalogue::Move,
    },
};

use super::{ensure_turn, pick, player_participant, Action, BattleService};

/// What one strike did.
pub(super) struct Strike {
    pub lines: Vec<String>,
    pub damage: i32,
    pub target: Option<String>,
}

impl<'a> BattleService<'a> {
    /// Attacks with one of the player's monsters on the field.
    ///
    /// A status condition may keep the monster from moving; the turn is used
    /// up either way.
    ///
    /// # Returns
    /// - `Ok(ActionResult)` - Every line of the attack and the AI turns that followed
    /// - `Err(GameError::NotParticipating)` - The player is not in the battle
    /// - `Err(GameError::BattleNotActive)` - The battle has ended
    /// - `Err(GameError::Rule)` - Not the player's turn, or no monster able to fight
    /// - `Err(GameError::UnknownMove)` - The monster does not know the move
    /// - `Err(GameError::InvalidTarget)` - No opposing monster matches the target
    pub async fn attack(&self, battle_id: i32, param: AttackParam) -> Result<ActionResult, AppError> {
        let state = self.state(battle_id).await?;
        let participant = player_participant(&state, &param.player_user_id)?;
        ensure_turn(&state, &participant)?;

        let fighters: Vec<&BattleMonster> = state
            .monsters_of(participant.id)
            .into_iter()
            .filter(|m| m.can_fight())
            .collect();
        if fighters.is_empty() {
            return Err(GameError::rule("You have no monster on the field that can fight").into());
        }
        let attacker = match param.attacker_name.as_deref() {
            Some(name) => pick(&fighters, Some(name))?,
            None => fighters[0],
        };

        if !attacker.knows(&param.move_name) {
            return Err(GameError::UnknownMove(format!(
                "{} doesn't know {}. Known moves: {}",
                attacker.name,
                param.move_name.trim(),
                attacker.moves.join(", ")
            ))
            .into());
        }
        let mv = self.load_move(&param.move_name).await?;

        let heals = mv.is_status() && battle::status_move_effect(&mv) == StatusMoveEffect::Heal;
        let target_id = if heals {
            None
        } else {
            let targets = state.targets_on(participant.side.opposite());
            Some(pick(&targets, param.target.as_deref())?.id)
        };

        let mut rng = rng::fresh();
        let mut attacker = attacker.clone();
        let (can_act, mut lines) = self.process_status(&mut rng, &mut attacker).await?;

        let mut damage_dealt = 0;
        let mut target_name = None;
        if can_act {
            let strike = self
                .strike(&mut rng, &state, &mut attacker, target_id, &mv)
                .await?;
            damage_dealt = strike.damage;
            target_name = strike.target;
            lines.extend(strike.lines);
        }

        self.record_turn(
            &state,
            &participant,
            Action {
                kind: "attack",
                battle_monster_id: Some(attacker.id),
                data: json!({
                    "move": mv.name,
                    "target": target_name,
                    "prevented": !can_act,
                }),
                damage_dealt,
                message: &param.message,
            },
        )
        .await?;
        self.log_action(&state, participant.id, &lines).await?;

        self.finish_action(battle_id, lines, None).await
    }

    /// Looks a move up by name. Tackle is always known even when the move
    /// table lacks it.
    pub(super) async fn load_move(&self, name: &str) -> Result<Move, AppError> {
        let repo = MoveRepository::new(self.db);

        match repo.get_by_name(name.trim()).await? {
            Some(mv) => Ok(mv),
            None if name.trim().eq_ignore_ascii_case(FALLBACK_MOVE) => Ok(Move::tackle()),
            None => Err(GameError::UnknownMove(format!("{} is not a known move", name.trim())).into()),
        }
    }

    /// Resolves `attacker` using `mv` on the target with `target_id`.
    ///
    /// Status moves heal the user or inflict their status. Damaging moves use
    /// the battle's weather and terrain and may leave a secondary status. A
    /// target brought to 0 HP faints and is knocked out.
    pub(super) async fn strike(
        &self,
        rng: &mut StdRng,
        state: &BattleState,
        attacker: &mut BattleMonster,
        target_id: Option<i32>,
        mv: &Move,
    ) -> Result<Strike, AppError> {
        let used = format!("{} used **{}**!", attacker.name, mv.name);

        if mv.is_status() {
            let effect = match battle::status_move_effect(mv) {
                StatusMoveEffect::Heal => {
                    let amount = damage::healing(attacker.max_hp, attacker.current_hp, None, Some(50));
                    attacker.current_hp += amount;
                    *attacker = self.save_monster(attacker).await?;

                    return Ok(Strike {
                        lines: vec![
                            used,
                            format!("**{}** restored {} HP!", attacker.name, amount),
                        ],
                        damage: 0,
                        target: None,
                    });
                }
                StatusMoveEffect::Inflict(effect) => effect,
            };

            let mut target = target_of(state, target_id)?;
            let (_, line) = status::apply(&target.name, &mut target.status_effects, effect);
            self.save_monster(&target).await?;

            return Ok(Strike {
                lines: vec![used, line],
                damage: 0,
                target: Some(target.name),
            });
        }

        let mut target = target_of(state, target_id)?;
        let result = damage::calculate(
            rng,
            &attacker.combatant(),
            &target.combatant(),
            mv,
            state.battle.conditions,
            1.0,
        );
        let mut lines = result.messages.clone();

        if result.damage > 0 {
            target.current_hp = (target.current_hp - result.damage).max(0);
            lines.push(format!(
                "**{}** took {} damage! ({}/{} HP)",
                target.name, result.damage, target.current_hp, target.max_hp
            ));
            if target.current_hp == 0 {
                target.is_fainted = true;
                target.is_active = false;
            }
        }

        if result.hit && target.is_alive() {
            if let Some(effect) = battle::secondary_status(rng, mv) {
                let (_, line) = status::apply(&target.name, &mut target.status_effects, effect);
                lines.push(line);
            }
        }

        let target = self.save_monster(&target).await?;
        if target.is_fainted {
            self.knockout(&target, &mut lines).await?;
        }

        Ok(Strike {
            lines,
            damage: result.damage,
            target: Some(target.name),
        })
    }
}

fn target_of(state: &BattleState, target_id: Option<i32>) -> Result<BattleMonster, GameError> {
    target_id
        .and_then(|id| state.monster(id))
        .cloned()
        .ok_or_else(|| GameError::InvalidTarget("There are no valid targets".to_string()))
}
