use crate::server::{data::inventory::InventoryRepository, model::trainer::InventoryChange};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add;
mod find_by_name;
mod get_all;
mod remove;
