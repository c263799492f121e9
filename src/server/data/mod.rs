//! Database repository layer for all domain entities.
//!
//! Each repository wraps a borrowed `DatabaseConnection` and handles the CRUD
//! operations of one table, or of a table and its child rows. Repositories use
//! SeaORM entity models internally and return domain models from
//! `server::model`, so services never see entity types. Failures are reported
//! as `DbErr`; the service layer turns them into `AppError`.

pub mod ability;
pub mod battle;
pub mod boss;
pub mod breeding_session;
pub mod capture;
pub mod encounter;
pub mod hatch_session;
pub mod inventory;
pub mod lineage;
pub mod monster;
pub mod monster_move;
pub mod species;
pub mod submission;
pub mod trainer;

#[cfg(test)]
mod test;
