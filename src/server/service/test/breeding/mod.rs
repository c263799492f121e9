use std::collections::HashMap;

use crate::server::{
    error::{game::GameError, AppError},
    model::breeding::BreedParam,
    service::{breeding::BreedingService, trainer::TrainerService},
};
use test_utils::{builder::TestBuilder, factory, factory::monster::MonsterFactory};

mod breed;
mod check_eligibility;
mod claim;
mod reroll;

/// A trainer holding one Legacy Leeway and two unrelated parents.
async fn breeding_pair(
    db: &sea_orm::DatabaseConnection,
) -> Result<(entity::trainer::Model, i32, i32), AppError> {
    let trainer = factory::create_trainer(db, "player-1").await?;
    factory::give_item(db, trainer.id, "items", "Legacy Leeway", 1).await?;
    let mother = MonsterFactory::new(db, &trainer)
        .name("Mother")
        .species1("Charizard")
        .type1("Fire")
        .build()
        .await?;
    let father = MonsterFactory::new(db, &trainer)
        .name("Father")
        .species1("Blastoise")
        .type1("Water")
        .build()
        .await?;

    Ok((trainer, mother.id, father.id))
}

fn param(trainer_id: i32, parent1_id: i32, parent2_id: i32) -> BreedParam {
    BreedParam {
        player_user_id: "player-1".to_string(),
        trainer_id,
        parent1_id,
        parent2_id,
        extra_items: HashMap::new(),
    }
}
