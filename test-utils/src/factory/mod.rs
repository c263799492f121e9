//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests.
//! Each entity has a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let trainer = factory::create_trainer(&db, "player-1").await?;
//! let monster = factory::create_monster(&db, &trainer).await?;
//! factory::give_item(&db, trainer.id, "balls", "Poke Ball", 3).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let monster = factory::monster::MonsterFactory::new(&db, &trainer)
//!     .name("Bulky")
//!     .level(50)
//!     .build()
//!     .await?;
//! ```

pub mod boss;
pub mod encounter;
pub mod helpers;
pub mod monster;
pub mod monster_move;
pub mod species;
pub mod trainer;

pub use boss::create_boss;
pub use encounter::{
    create_battle_encounter, create_wild_encounter, create_wild_encounter_at_level,
};
pub use monster::create_monster;
pub use monster_move::create_move;
pub use species::create_species;
pub use trainer::{create_trainer, give_item};
