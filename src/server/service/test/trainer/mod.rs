use crate::server::{
    error::{game::GameError, AppError},
    model::trainer::{CreateTrainerParam, InventoryChange},
    service::trainer::TrainerService,
};
use test_utils::{builder::TestBuilder, factory, factory::trainer::TrainerFactory};

mod add_coins;
mod consume;
mod create;
mod get_owned;
mod inventory;
