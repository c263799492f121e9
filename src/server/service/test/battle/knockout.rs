use sea_orm::{sea_query::Expr, ColumnTrait, EntityTrait, QueryFilter};

use crate::server::service::monster::MonsterService;

use super::*;

/// Leaves every wild monster in the battle on 1 HP so that one Tackle
/// knocks it out.
async fn weaken_wild(db: &DatabaseConnection, battle_id: i32) -> Result<(), AppError> {
    entity::prelude::BattleMonster::update_many()
        .col_expr(entity::battle_monster::Column::CurrentHp, Expr::value(1))
        .filter(entity::battle_monster::Column::BattleId.eq(battle_id))
        .filter(entity::battle_monster::Column::MonsterId.is_null())
        .exec(db)
        .await?;

    Ok(())
}

/// Tests that knocking out a level 10 wild monster levels up the attacker and
/// that the wild group sends out its next monster.
///
/// Expected: Ok with Sparky at level 12 and the second Pikachu on the field
#[tokio::test]
async fn knockout_levels_up_and_sends_next() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_battle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (trainer, battle_id) = wild_battle(db, 2).await?;
    weaken_wild(db, battle_id).await?;

    let service = BattleService::new(db);
    let result = service.attack(battle_id, attack("Tackle")).await?;

    assert!(result
        .messages
        .iter()
        .any(|m| m.contains("**Wild Pikachu** was knocked out!")));
    assert!(result
        .messages
        .iter()
        .any(|m| m == "Wild Group 1 sent out **Wild Pikachu**!"));

    let sparky = MonsterService::new(db)
        .list_by_trainer(trainer.id)
        .await?
        .into_iter()
        .find(|m| m.name() == "Sparky")
        .unwrap();
    // 1 + 10 / 10
    assert_eq!(sparky.level(), 12);

    let wild = result.state.monsters_on(TeamSide::Opponents);
    assert_eq!(wild.iter().filter(|m| m.is_fainted).count(), 1);
    assert!(wild.iter().any(|m| !m.is_fainted && m.is_active));

    Ok(())
}

/// Tests that knocking out the last wild monster ends the battle and pays the
/// winner.
///
/// Expected: Ok with the players winning, the wild group out of monsters and
/// the reward's coins credited to Ash
#[tokio::test]
async fn last_knockout_wins_and_pays() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_battle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (trainer, battle_id) = wild_battle(db, 1).await?;
    weaken_wild(db, battle_id).await?;

    let service = BattleService::new(db);
    let result = service.attack(battle_id, attack("Tackle")).await?;

    assert!(result
        .messages
        .iter()
        .any(|m| m == "Wild Group 1 has no more monsters left!"));
    assert_eq!(result.state.battle.status, BattleStatus::Completed);
    assert_eq!(
        result.state.battle.winner,
        Some(Winner::Side(TeamSide::Players))
    );

    assert_eq!(result.rewards.len(), 1);
    let reward = &result.rewards[0];
    assert_eq!(reward.trainer_id, trainer.id);
    assert!(reward.coins > 0);

    let paid = TrainerService::new(db).get(trainer.id).await?;
    assert_eq!(paid.currency_amount, trainer.currency_amount + reward.coins);

    Ok(())
}
