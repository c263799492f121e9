//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixture functions create in-memory entity models for use in unit tests and as
//! default values for factories. Unlike factories, fixtures do NOT insert data
//! into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let trainer = fixture::trainer::entity();
//!
//! let rich = fixture::trainer::entity_builder()
//!     .currency_amount(5000)
//!     .build();
//! ```

pub mod monster;
pub mod monster_move;
pub mod species;
pub mod trainer;

pub use monster::{entity as monster_entity, entity_builder as monster_entity_builder};
pub use monster_move::{entity as monster_move_entity, entity_builder as monster_move_entity_builder};
pub use species::{entity as species_entity, entity_builder as species_entity_builder};
pub use trainer::{entity as trainer_entity, entity_builder as trainer_entity_builder};
