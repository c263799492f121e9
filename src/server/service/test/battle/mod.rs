use crate::server::{
    error::{game::GameError, AppError},
    model::battle::{
        AttackParam, BattleStatus, BattleType, MonsterActionParam, TeamSide, UseItemParam, Winner,
    },
    service::{battle::BattleService, trainer::TrainerService},
};
use sea_orm::DatabaseConnection;
use test_utils::{
    builder::TestBuilder, factory, factory::monster::MonsterFactory,
    factory::trainer::TrainerFactory,
};

mod admin;
mod attack;
mod end;
mod join;
mod knockout;
mod start_battle;
mod switch;

/// Ash with one level 10 monster, Sparky, that knows Tackle.
async fn ash(db: &DatabaseConnection) -> Result<(entity::trainer::Model, i32), AppError> {
    let trainer = TrainerFactory::new(db, "player-1").name("Ash").build().await?;
    let monster = MonsterFactory::new(db, &trainer).name("Sparky").build().await?;

    Ok((trainer, monster.id))
}

/// A wild battle against one group of `count` Pikachu, started by Ash.
async fn wild_battle(
    db: &DatabaseConnection,
    count: i32,
) -> Result<(entity::trainer::Model, i32), AppError> {
    let (trainer, monster_id) = ash(db).await?;
    let (encounter, _) = factory::create_wild_encounter(db, count).await?;

    let result = BattleService::new(db)
        .start_battle(encounter.id, "player-1", trainer.id, &[monster_id])
        .await?;

    Ok((trainer, result.state.battle.id))
}

fn attack(move_name: &str) -> AttackParam {
    AttackParam {
        player_user_id: "player-1".to_string(),
        move_name: move_name.to_string(),
        target: None,
        attacker_name: None,
        message: "Sparky charges in!".to_string(),
    }
}

fn monster_action(player: &str, monster_name: &str) -> MonsterActionParam {
    MonsterActionParam {
        player_user_id: player.to_string(),
        monster_name: monster_name.to_string(),
        message: String::new(),
    }
}
