use crate::server::{
    error::{game::GameError, AppError},
    model::monster::{CreateMonsterParam, MonsterTemplate},
    service::monster::MonsterService,
};
use test_utils::{builder::TestBuilder, factory, factory::monster::MonsterFactory};

mod add_levels;
mod create;
mod lineage;
