use crate::server::{
    data::species::SpeciesRepository, engine::constants::MonsterTable,
    model::catalogue::CreateSpeciesParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::species::SpeciesFactory};

mod create;
mod get_all;
