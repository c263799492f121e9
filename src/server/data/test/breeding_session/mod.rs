use std::collections::HashMap;

use crate::server::{
    data::breeding_session::BreedingSessionRepository,
    model::{breeding::NewBreedingSession, roll::RolledMonster},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_older_than;
mod update;

fn offspring(species: &str) -> RolledMonster {
    RolledMonster {
        species: vec![species.to_string()],
        types: vec!["Normal".to_string()],
        attribute: None,
        franchise: Some("pokemon".to_string()),
    }
}

fn new_session(trainer_id: i32, parent1_id: i32, parent2_id: i32) -> NewBreedingSession {
    NewBreedingSession {
        player_user_id: "player-1".to_string(),
        trainer_id,
        parent1_id,
        parent2_id,
        extra_items: HashMap::from([("Mystery Egg Charm".to_string(), 1)]),
        offspring: vec![offspring("Eevee"), offspring("Rattata")],
    }
}
