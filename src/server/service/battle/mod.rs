//! Turn-based battles between players, NPC trainers and wild groups.
//!
//! `BattleService` owns every rule of a running battle. Each player action
//! loads the battle, checks who may act, applies its effects to the stored
//! snapshots, then ends the battle or passes the turn on and lets the AI play
//! until a player is up again.
//!
//! The service is organized into separate modules by concern:
//! - `start` - Battles started from encounters
//! - `join` - Extra players and PvP battles
//! - `attack` - Player attacks and the strike shared with the AI
//! - `item` - Healing items and balls
//! - `switch` - Releasing and withdrawing monsters
//! - `ai` - Turns of NPC trainers and wild groups
//! - `knockout` - Fainting, level rewards and win conditions
//! - `end` - Ending a battle and paying out rewards
//! - `admin` - Weather, terrain and knockout limit

pub mod admin;
pub mod ai;
pub mod attack;
pub mod end;
pub mod item;
pub mod join;
pub mod knockout;
pub mod start;
pub mod switch;

use rand::rngs::StdRng;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        battle::{
            log::BattleLogRepository, monster::BattleMonsterRepository,
            participant::ParticipantRepository, turn::BattleTurnRepository, BattleRepository,
        },
        monster::MonsterRepository,
    },
    engine::{battle, rng, status},
    error::{game::GameError, AppError},
    model::{
        battle::{
            ActionResult, BattleMonster, BattleState, LogType, NewBattleMonster, Participant,
            TurnRecord,
        },
        monster::Monster,
    },
};

/// What a participant did with its turn.
struct Action<'m> {
    kind: &'static str,
    battle_monster_id: Option<i32>,
    data: serde_json::Value,
    damage_dealt: i32,
    /// Roleplay text; empty for AI turns.
    message: &'m str,
}

pub struct BattleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BattleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads a battle with its participants, monsters and recent log lines.
    ///
    /// # Returns
    /// - `Ok(BattleState)` - The battle and everything in it
    /// - `Err(AppError::NotFound)` - No battle with that ID
    pub async fn state(&self, battle_id: i32) -> Result<BattleState, AppError> {
        let repo = BattleRepository::new(self.db);

        repo.state(battle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Battle not found".to_string()))
    }

    /// Loads a battle that has not ended yet.
    async fn active_state(&self, battle_id: i32) -> Result<BattleState, AppError> {
        let state = self.state(battle_id).await?;
        if !state.battle.is_active() {
            return Err(GameError::BattleNotActive.into());
        }
        Ok(state)
    }

    /// Moves the turn pointer to the next participant in turn order.
    pub async fn advance_turn(&self, battle_id: i32) -> Result<(), AppError> {
        let state = self.state(battle_id).await?;
        let (index, turn) = battle::advance(
            state.battle.current_participant_index,
            state.battle.current_turn,
            state.turn_order().len(),
        );

        BattleRepository::new(self.db)
            .set_turn(battle_id, index, turn)
            .await?;

        Ok(())
    }

    async fn log(
        &self,
        state: &BattleState,
        participant_id: Option<i32>,
        log_type: LogType,
        message: impl Into<String>,
    ) -> Result<(), AppError> {
        BattleLogRepository::new(self.db)
            .create(
                state.battle.id,
                participant_id,
                state.battle.current_turn,
                log_type,
                message.into(),
            )
            .await?;
        Ok(())
    }

    /// Logs an action's lines as one entry.
    async fn log_action(
        &self,
        state: &BattleState,
        participant_id: i32,
        lines: &[String],
    ) -> Result<(), AppError> {
        if lines.is_empty() {
            return Ok(());
        }
        self.log(state, Some(participant_id), LogType::Action, lines.join("\n"))
            .await
    }

    /// Records a turn and counts the roleplay message towards the participant.
    async fn record_turn(
        &self,
        state: &BattleState,
        participant: &Participant,
        action: Action<'_>,
    ) -> Result<(), AppError> {
        let words = battle::word_count(action.message);

        BattleTurnRepository::new(self.db)
            .create(TurnRecord {
                battle_id: state.battle.id,
                turn_number: state.battle.current_turn,
                participant_id: participant.id,
                battle_monster_id: action.battle_monster_id,
                action_type: action.kind.to_string(),
                action_data: action.data,
                damage_dealt: action.damage_dealt,
                message: (!action.message.trim().is_empty()).then(|| action.message.to_string()),
                word_count: words,
            })
            .await?;

        if !participant.is_ai() {
            ParticipantRepository::new(self.db)
                .add_message(participant.id, words)
                .await?;
        }

        Ok(())
    }

    async fn save_monster(&self, monster: &BattleMonster) -> Result<BattleMonster, AppError> {
        Ok(BattleMonsterRepository::new(self.db).save(monster).await?)
    }

    /// Loads the monsters a trainer brings into a battle, in the requested order.
    ///
    /// # Returns
    /// - `Ok(Vec<Monster>)` - The team
    /// - `Err(AppError::BadRequest)` - A monster is listed twice
    /// - `Err(AppError::NotFound)` - A monster does not exist
    /// - `Err(GameError::NotOwner)` - A monster belongs to another trainer
    async fn team(&self, trainer_id: i32, monster_ids: &[i32]) -> Result<Vec<Monster>, AppError> {
        let monsters = MonsterRepository::new(self.db)
            .get_by_ids(monster_ids)
            .await?;

        let mut team: Vec<Monster> = Vec::with_capacity(monster_ids.len());
        for id in monster_ids {
            if team.iter().any(|m| m.id == *id) {
                return Err(AppError::BadRequest(format!("Monster {} is listed twice", id)));
            }
            let monster = monsters
                .iter()
                .find(|m| m.id == *id)
                .ok_or_else(|| AppError::NotFound(format!("Monster {} not found", id)))?;
            if monster.trainer_id != trainer_id {
                return Err(GameError::NotOwner.into());
            }
            team.push(monster.clone());
        }

        Ok(team)
    }

    /// Puts a team into a battle. Only the first monster starts on the field.
    async fn field_monsters(
        &self,
        battle_id: i32,
        participant_id: i32,
        team: &[Monster],
    ) -> Result<Vec<BattleMonster>, AppError> {
        let repo = BattleMonsterRepository::new(self.db);

        let mut fielded = Vec::with_capacity(team.len());
        for (position, monster) in team.iter().enumerate() {
            let max_hp = battle::battle_hp(monster.profile.stats.hp, monster.level());
            let mut snapshot = NewBattleMonster::from_monster(
                battle_id,
                participant_id,
                monster,
                max_hp,
                position as i32,
            );
            snapshot.is_active = position == 0;

            fielded.push(repo.create(snapshot).await?);
        }

        Ok(fielded)
    }

    /// Runs a monster's status effects before it acts. Damage is applied and
    /// saved, and a monster that faints from it is knocked out.
    ///
    /// # Returns
    /// - `Ok((bool, Vec<String>))` - Whether the monster may still act, and the status lines
    async fn process_status(
        &self,
        rng: &mut StdRng,
        monster: &mut BattleMonster,
    ) -> Result<(bool, Vec<String>), AppError> {
        if monster.status_effects.is_empty() {
            return Ok((true, Vec::new()));
        }

        let outcome = status::process(rng, &monster.name, &monster.status_effects, monster.max_hp);
        let mut lines = outcome.messages;

        monster.status_effects = outcome.remaining;
        monster.current_hp = (monster.current_hp - outcome.damage).max(0);
        if monster.current_hp == 0 {
            monster.is_fainted = true;
            monster.is_active = false;
        }
        *monster = self.save_monster(monster).await?;

        if monster.is_fainted {
            self.knockout(monster, &mut lines).await?;
            return Ok((false, lines));
        }

        Ok((outcome.can_act, lines))
    }

    /// Wraps up a player action: ends the battle when a win condition is met,
    /// otherwise passes the turn on and plays the AI participants that follow.
    async fn finish_action(
        &self,
        battle_id: i32,
        mut messages: Vec<String>,
        captured: Option<Monster>,
    ) -> Result<ActionResult, AppError> {
        let mut rewards = self.check_outcome(battle_id, &mut messages).await?;

        if rewards.is_none() {
            self.advance_turn(battle_id).await?;
            let mut rng = rng::fresh();
            rewards = self
                .process_current_turn(&mut rng, battle_id, &mut messages)
                .await?;
        }

        let state = self.state(battle_id).await?;

        Ok(ActionResult {
            messages,
            captured,
            rewards: rewards.unwrap_or_default(),
            state,
        })
    }
}

/// The caller's participant in an active battle.
///
/// # Returns
/// - `Ok(Participant)` - The player's participant
/// - `Err(GameError::NotParticipating)` - The player is not in the battle
/// - `Err(GameError::BattleNotActive)` - The battle has ended
fn player_participant(state: &BattleState, player_user_id: &str) -> Result<Participant, GameError> {
    let participant = state
        .participant_for_player(player_user_id)
        .cloned()
        .ok_or(GameError::NotParticipating)?;

    if !state.battle.is_active() {
        return Err(GameError::BattleNotActive);
    }

    Ok(participant)
}

fn ensure_turn(state: &BattleState, participant: &Participant) -> Result<(), GameError> {
    match state.current_participant() {
        Some(current) if current.id == participant.id => Ok(()),
        Some(current) => Err(GameError::rule(format!(
            "It's not your turn! Waiting for {}",
            current.trainer_name
        ))),
        None => Err(GameError::rule("It's not your turn!")),
    }
}

/// Picks among `candidates` by 1-based index or (partial) name.
fn pick<'s>(
    candidates: &[&'s BattleMonster],
    target: Option<&str>,
) -> Result<&'s BattleMonster, GameError> {
    let names: Vec<&str> = candidates.iter().map(|m| m.name.as_str()).collect();
    let index = battle::pick_target(&names, target).map_err(GameError::InvalidTarget)?;

    Ok(candidates[index])
}
