use std::collections::HashMap;

use crate::{
    model::nursery::SpeciesInputs,
    server::{
        error::{game::GameError, AppError},
        model::nursery::{SelectHatchParam, StartHatchParam},
        service::{nursery::NurseryService, trainer::TrainerService},
    },
};
use test_utils::{builder::TestBuilder, factory, factory::species::SpeciesFactory};

mod reroll;
mod select;
mod start_hatch;

/// A trainer with eggs and incubators, and two base stage species to hatch.
async fn nursery_trainer(
    db: &sea_orm::DatabaseConnection,
    eggs: i32,
) -> Result<entity::trainer::Model, AppError> {
    for (name, types) in [("Pichu", ["Electric"]), ("Eevee", ["Normal"])] {
        SpeciesFactory::new(db, name)
            .types(&types)
            .stage(Some("Base Stage"))
            .build()
            .await?;
    }

    let trainer = factory::create_trainer(db, "player-1").await?;
    factory::give_item(db, trainer.id, "eggs", "Standard Egg", eggs).await?;
    factory::give_item(db, trainer.id, "eggs", "Incubator", eggs).await?;

    Ok(trainer)
}

fn hatch(trainer_id: i32, egg_count: u32) -> StartHatchParam {
    StartHatchParam {
        player_user_id: "player-1".to_string(),
        trainer_id,
        egg_count,
        use_incubator: true,
        image_url: None,
        selected_items: HashMap::new(),
        species_inputs: SpeciesInputs::default(),
    }
}

fn pick(egg_id: u32, option_index: usize, use_edenwiess: bool) -> SelectHatchParam {
    SelectHatchParam {
        player_user_id: "player-1".to_string(),
        egg_id,
        option_index,
        name: None,
        use_edenwiess,
    }
}
