use crate::server::{
    data::submission::SubmissionRepository,
    model::submission::{BonusRolls, SubmissionKind, SubmissionRewards, TrainerReward},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod get_by_player;
