use crate::server::{
    error::{game::GameError, AppError},
    model::boss::{CreateBossParam, GRUNT_REWARD, TOP_REWARD},
    service::boss::BossService,
};
use test_utils::{builder::TestBuilder, factory};

mod add_damage;
mod claim_reward;
mod create;

fn boss_param(name: &str, total_hp: i32) -> CreateBossParam {
    CreateBossParam {
        name: name.to_string(),
        description: None,
        image_url: None,
        total_hp,
        month: 10,
        year: 2026,
    }
}
