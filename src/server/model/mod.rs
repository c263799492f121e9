//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry validated
//! request data from controllers into services.

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
