//! Releasing monsters onto the field and withdrawing them.
//!
//! Neither uses up the turn, so a player can swap monsters and still attack.

use serde_json::json;

use crate::server::{
    data::{battle::monster::BattleMonsterRepository, monster::MonsterRepository},
    engine::battle,
    error::{game::GameError, AppError},
    model::battle::{ActionResult, BattleState, MonsterActionParam, NewBattleMonster, Participant},
};

use super::{player_participant, Action, BattleService};

impl<'a> BattleService<'a> {
    /// Sends one of the trainer's monsters onto the field.
    ///
    /// A monster already in the battle is brought back; any other monster of
    /// the trainer joins the battle.
    ///
    /// # Returns
    /// - `Ok(ActionResult)` - The release line and the battle state
    /// - `Err(AppError::NotFound)` - The trainer has no monster with that name
    /// - `Err(GameError::Rule)` - The monster is already on the field or has fainted
    pub async fn release(
        &self,
        battle_id: i32,
        param: MonsterActionParam,
    ) -> Result<ActionResult, AppError> {
        let state = self.state(battle_id).await?;
        let participant = player_participant(&state, &param.player_user_id)?;
        let trainer_id = participant.trainer_id.ok_or(GameError::NotParticipating)?;

        let monster = MonsterRepository::new(self.db)
            .find_by_name_for_trainer(trainer_id, &param.monster_name)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "{} has no monster named {}",
                    participant.trainer_name,
                    param.monster_name.trim()
                ))
            })?;

        let own = state.monsters_of(participant.id);
        let snapshot = match own.iter().find(|m| m.monster_id == Some(monster.id)) {
            Some(m) if m.is_fainted => {
                return Err(GameError::rule(format!("{} has fainted and can't battle", m.name)).into());
            }
            Some(m) if m.is_active => {
                return Err(GameError::rule(format!("{} is already in battle", m.name)).into());
            }
            Some(m) => {
                let mut m = (*m).clone();
                m.is_active = true;
                self.save_monster(&m).await?
            }
            None => {
                let max_hp = battle::battle_hp(monster.profile.stats.hp, monster.level());
                let snapshot = NewBattleMonster::from_monster(
                    battle_id,
                    participant.id,
                    &monster,
                    max_hp,
                    own.len() as i32,
                );
                BattleMonsterRepository::new(self.db).create(snapshot).await?
            }
        };

        let line = format!("{} sent out **{}**!", participant.trainer_name, snapshot.name);
        self.switched(&state, &participant, snapshot.id, "release", line, &param.message)
            .await
    }

    /// Takes a monster off the field. It stays in the battle and can be
    /// released again.
    ///
    /// # Returns
    /// - `Ok(ActionResult)` - The withdraw line and the battle state
    /// - `Err(GameError::Rule)` - The monster is not on the field, or it is the
    ///   last one able to fight
    pub async fn withdraw(
        &self,
        battle_id: i32,
        param: MonsterActionParam,
    ) -> Result<ActionResult, AppError> {
        let state = self.state(battle_id).await?;
        let participant = player_participant(&state, &param.player_user_id)?;

        let own = state.monsters_of(participant.id);
        let wanted = param.monster_name.trim();
        let monster = own
            .iter()
            .find(|m| m.is_active && m.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GameError::rule(format!("{} is not on the field", wanted)))?;

        let fighting = own.iter().filter(|m| m.can_fight()).count();
        if monster.can_fight() && fighting <= 1 {
            return Err(GameError::rule("You can't withdraw your last monster on the field").into());
        }

        let mut monster = (*monster).clone();
        monster.is_active = false;
        let monster = self.save_monster(&monster).await?;

        let line = format!("{} withdrew **{}**!", participant.trainer_name, monster.name);
        self.switched(&state, &participant, monster.id, "withdraw", line, &param.message)
            .await
    }

    async fn switched(
        &self,
        state: &BattleState,
        participant: &Participant,
        battle_monster_id: i32,
        direction: &str,
        line: String,
        message: &str,
    ) -> Result<ActionResult, AppError> {
        self.record_turn(
            state,
            participant,
            Action {
                kind: "switch",
                battle_monster_id: Some(battle_monster_id),
                data: json!({ "action": direction }),
                damage_dealt: 0,
                message,
            },
        )
        .await?;

        let lines = vec![line];
        self.log_action(state, participant.id, &lines).await?;

        Ok(ActionResult {
            messages: lines,
            captured: None,
            rewards: Vec::new(),
            state: self.state(state.battle.id).await?,
        })
    }
}
