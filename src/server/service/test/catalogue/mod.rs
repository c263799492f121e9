use crate::server::{
    engine::constants::MonsterTable,
    error::AppError,
    model::catalogue::{CreateMoveParam, CreateSpeciesParam},
    service::catalogue::CatalogueService,
};
use test_utils::{builder::TestBuilder, factory, factory::species::SpeciesFactory};

mod create_move;
mod create_species;
mod list_species;
