use crate::server::{data::monster_move::MoveRepository, model::catalogue::CreateMoveParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_name;
mod get_by_types;
