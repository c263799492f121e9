//! Request and response DTOs shared by every API endpoint.

pub mod api;
pub mod battle;
pub mod boss;
pub mod breeding;
pub mod catalogue;
pub mod encounter;
pub mod monster;
pub mod nursery;
pub mod roll;
pub mod submission;
pub mod trainer;
