use crate::server::data::capture::CaptureRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_for_player;
