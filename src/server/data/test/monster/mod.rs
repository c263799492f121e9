use crate::server::data::monster::MonsterRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::monster::MonsterFactory};

mod create;
mod find_by_name_for_trainer;
mod get_by_ids;
mod rename;
mod update_profile;
