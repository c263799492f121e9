//! Service layer for game rules and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Game Rules**: Ownership, item and eligibility checks before anything is written
//! - **Orchestration**: Feeding catalogue data into the pure `engine` and persisting its results
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Randomness is created here, per call, and handed to the engine.

pub mod battle;
pub mod boss;
pub mod breeding;
pub mod catalogue;
pub mod encounter;
pub mod monster;
pub mod nursery;
pub mod roller;
pub mod submission;
pub mod trainer;

#[cfg(test)]
mod test;
