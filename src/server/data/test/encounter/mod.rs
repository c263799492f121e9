use crate::server::{
    data::encounter::EncounterRepository,
    model::encounter::{EncounterItem, EncounterKind, EncounterPlan, GroupPlan, NpcTrainer},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_id;
