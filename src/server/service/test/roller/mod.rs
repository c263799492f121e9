use crate::{
    model::roll::{RollParams, UserSettings},
    server::{error::AppError, service::roller::RollerService},
};
use test_utils::{builder::TestBuilder, factory};

mod options;
mod roll;
