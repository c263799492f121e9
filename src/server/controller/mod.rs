//! HTTP handlers. Each controller converts request DTOs into params, calls its
//! service and converts the domain result back into a DTO.

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
