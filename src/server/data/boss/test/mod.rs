use crate::server::{
    data::boss::{
        damage::BossDamageRepository, reward_claim::BossRewardClaimRepository, BossRepository,
    },
    model::boss::{CreateBossParam, GRUNT_REWARD, STATUS_DEFEATED, TOP_REWARD},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
