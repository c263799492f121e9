use crate::server::{data::trainer::TrainerRepository, model::trainer::CreateTrainerParam};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory, factory::trainer::TrainerFactory};

mod add_coins;
mod add_levels;
mod create;
mod delete;
mod find_by_name_for_player;
mod get_by_player;
