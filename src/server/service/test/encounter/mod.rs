use crate::{
    model::{encounter::EncounterLocation, roll::UserSettings},
    server::{
        error::{game::GameError, AppError},
        model::encounter::{CaptureParam, EncounterKind},
        service::{encounter::EncounterService, trainer::TrainerService},
    },
};
use test_utils::{builder::TestBuilder, factory, factory::trainer::TrainerFactory};

mod capture;
mod generate;

fn throw(encounter_id: i32, ball: &str, group_index: usize) -> CaptureParam {
    CaptureParam {
        encounter_id,
        player_user_id: "player-1".to_string(),
        trainer_name: "Ash".to_string(),
        ball: ball.to_string(),
        group_index,
        pokepuffs: 0,
    }
}
