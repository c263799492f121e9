use crate::{
    model::nursery::HatchClaimDto,
    server::{
        data::hatch_session::HatchSessionRepository,
        engine::hatcher::HatchedEgg,
        model::{nursery::NewHatchSession, roll::RolledMonster},
    },
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_older_than;

fn egg(egg_id: u32) -> HatchedEgg {
    HatchedEgg {
        egg_id,
        seed: format!("seed-egg-{}", egg_id),
        monsters: vec![
            RolledMonster {
                species: vec!["Togepi".to_string()],
                types: vec!["Fairy".to_string()],
                attribute: None,
                franchise: Some("pokemon".to_string()),
            },
            RolledMonster {
                species: vec!["Koromon".to_string()],
                types: vec!["Dragon".to_string()],
                attribute: Some("Vaccine".to_string()),
                franchise: Some("digimon".to_string()),
            },
        ],
    }
}

fn new_session(trainer_id: i32) -> NewHatchSession {
    NewHatchSession {
        player_user_id: "player-1".to_string(),
        trainer_id,
        params: Default::default(),
        eggs: vec![egg(1), egg(2)],
    }
}
