//! Pure game rules.
//!
//! Everything in this module is free of I/O. Functions take an `Rng` so callers
//! decide between a fresh generator for live play and a seeded one for
//! reproducible rolls and tests. Services load what the rules need from the
//! database, call into the engine, and persist the outcome.
//!
//! - `constants` - Franchise schemas, item tables and reward rates
//! - `rng` - Seeded generators and weighted picks
//! - `type_chart` - Type effectiveness
//! - `damage` - Move resolution, healing and weather chip damage
//! - `status` - Status effect application and per-turn processing
//! - `stats` - Stat formulas, monster initialization and level-ups
//! - `roller` - Constrained random species generation
//! - `breeding` - Breeding eligibility and offspring inheritance
//! - `hatcher` - Egg hatching with nursery item effects
//! - `capture` - Ball normalization and catch probability
//! - `battle` - Turn order, targeting, knockouts and win conditions
//! - `encounter` - Random encounter generation
//! - `reward` - Submission reward formulas

pub mod battle;
pub mod breeding;
pub mod capture;
pub mod constants;
pub mod damage;
pub mod encounter;
pub mod hatcher;
pub mod reward;
pub mod rng;
pub mod roller;
pub mod stats;
pub mod status;
pub mod type_chart;
