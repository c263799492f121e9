//! Items used in battle: healing items on the player's own monsters and balls
//! thrown at wild monsters.

use rand::rngs::StdRng;
use serde_json::json;

use crate::server::{
    data::inventory::InventoryRepository,
    engine::{
        capture,
        constants::{self, HealingItem},
        damage, rng, status,
    },
    error::{game::GameError, AppError},
    model::{
        battle::{ActionResult, BattleMonster, BattleState, BattleType, UseItemParam},
        monster::{CreateMonsterParam, Monster, MonsterTemplate},
        trainer::{InventoryChange, Trainer},
    },
    service::{monster::MonsterService, trainer::TrainerService},
};

use super::{ensure_turn, pick, player_participant, Action, BattleService};

const WHERE_MET: &str = "Battle Capture";

/// An item use that passed every check.
enum ItemUse {
    Heal(&'static HealingItem, BattleMonster),
    Ball(BattleMonster),
}

impl<'a> BattleService<'a> {
    /// Uses an item from the trainer's inventory. One is consumed.
    ///
    /// Healing items target the player's own alive monsters, the one on the
    /// field by default. Balls target wild monsters and only work in wild
    /// battles; a caught monster leaves the battle and joins the trainer.
    ///
    /// # Returns
    /// - `Ok(ActionResult)` - The item's effect, any caught monster and the AI turns
    ///   that followed
    /// - `Err(GameError::MissingItem)` - The trainer has none of the item
    /// - `Err(GameError::Rule)` - Not the player's turn, an item that does nothing in
    ///   battle, or a ball outside a wild battle
    /// - `Err(GameError::InvalidTarget)` - No monster matches the target
    pub async fn use_item(&self, battle_id: i32, param: UseItemParam) -> Result<ActionResult, AppError> {
        let state = self.state(battle_id).await?;
        let participant = player_participant(&state, &param.player_user_id)?;
        ensure_turn(&state, &participant)?;

        let trainer = TrainerService::new(self.db)
            .get_owned(param.trainer_id, &param.player_user_id)
            .await?;
        let stack = InventoryRepository::new(self.db)
            .find_by_name(trainer.id, param.item_name.trim())
            .await?
            .filter(|s| s.quantity > 0)
            .ok_or_else(|| GameError::missing_item(param.item_name.trim()))?;

        let item_use = if let Some(healing) = constants::healing_item(&stack.item_name) {
            let mut own: Vec<&BattleMonster> = state
                .monsters_of(participant.id)
                .into_iter()
                .filter(|m| m.is_alive())
                .collect();
            own.sort_by_key(|m| !m.is_active);
            ItemUse::Heal(healing, pick(&own, param.target.as_deref())?.clone())
        } else if constants::is_ball(&stack.item_name) {
            if state.battle.battle_type != BattleType::Wild {
                return Err(GameError::rule("Balls can only be used in wild battles").into());
            }
            let targets = state.targets_on(participant.side.opposite());
            ItemUse::Ball(pick(&targets, param.target.as_deref())?.clone())
        } else {
            return Err(GameError::rule(format!("{} can't be used in battle", stack.item_name)).into());
        };

        TrainerService::new(self.db)
            .remove_item(InventoryChange::new(
                trainer.id,
                stack.category.clone(),
                stack.item_name.clone(),
                1,
            ))
            .await?;

        let mut rng = rng::fresh();
        let (lines, captured, target_name) = match item_use {
            ItemUse::Heal(item, target) => {
                let name = target.name.clone();
                (self.heal(&trainer, item, target).await?, None, name)
            }
            ItemUse::Ball(target) => {
                let name = target.name.clone();
                let (lines, captured) = self
                    .throw_ball(&mut rng, &state, &trainer, &stack.item_name, target)
                    .await?;
                (lines, captured, name)
            }
        };

        self.record_turn(
            &state,
            &participant,
            Action {
                kind: "item",
                battle_monster_id: None,
                data: json!({
                    "item": stack.item_name,
                    "target": target_name,
                    "captured": captured.is_some(),
                }),
                damage_dealt: 0,
                message: &param.message,
            },
        )
        .await?;
        self.log_action(&state, participant.id, &lines).await?;

        self.finish_action(battle_id, lines, captured).await
    }

    async fn heal(
        &self,
        trainer: &Trainer,
        item: &HealingItem,
        mut target: BattleMonster,
    ) -> Result<Vec<String>, AppError> {
        let amount = damage::healing(target.max_hp, target.current_hp, item.amount, item.percentage);
        target.current_hp += amount;

        let mut lines = vec![format!(
            "{} used a **{}** on **{}**! Restored {} HP. ({}/{} HP)",
            trainer.name, item.name, target.name, amount, target.current_hp, target.max_hp
        )];
        if item.cures_status && status::cure_all(&mut target.status_effects) {
            lines.push(format!("**{}** was cured of all status conditions!", target.name));
        }

        self.save_monster(&target).await?;

        Ok(lines)
    }

    async fn throw_ball(
        &self,
        rng: &mut StdRng,
        state: &BattleState,
        trainer: &Trainer,
        ball: &str,
        mut target: BattleMonster,
    ) -> Result<(Vec<String>, Option<Monster>), AppError> {
        let ball = capture::normalize_ball(ball).unwrap_or(ball);
        let chance = capture::capture_chance(rng, capture::catch_rate(ball), 0, target.level, true);
        let mut lines = vec![format!("{} threw a **{}** at **{}**!", trainer.name, ball, target.name)];

        if !capture::attempt(rng, chance) {
            lines.push(format!("Oh no! **{}** broke free!", target.name));
            return Ok((lines, None));
        }

        target.is_fainted = true;
        target.is_active = false;
        let target = self.save_monster(&target).await?;

        let species = species_of(&target);
        let template = MonsterTemplate::new(species.join("/"), species, target.types.clone())
            .attribute(target.attribute.clone())
            .level(target.level)
            .where_met(WHERE_MET);
        let monster = MonsterService::new(self.db)
            .create(CreateMonsterParam::new(
                trainer.id,
                &trainer.player_user_id,
                template,
            ))
            .await?;

        lines.push(format!("Gotcha! **{}** was caught!", target.name));
        tracing::info!(
            "{} caught {} (monster {}) in battle {}",
            trainer.name,
            target.name,
            monster.id,
            state.battle.id
        );

        let state = self.state(state.battle.id).await?;
        if let Some(owner) = state.participant(target.participant_id) {
            self.send_next(&state, owner, target.id, &mut lines).await?;
        }

        Ok((lines, Some(monster)))
    }
}

/// Species of a wild snapshot, recovered from its "Wild A/B" name.
fn species_of(monster: &BattleMonster) -> Vec<String> {
    monster
        .name
        .strip_prefix("Wild ")
        .unwrap_or(&monster.name)
        .split('/')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
