//! SeaORM entity models for every table in the game database.

pub mod prelude;

pub mod ability;
pub mod battle;
pub mod battle_log;
pub mod battle_monster;
pub mod battle_participant;
pub mod battle_turn;
pub mod boss;
pub mod boss_damage;
pub mod boss_reward_claim;
pub mod breeding_session;
pub mod encounter;
pub mod encounter_capture;
pub mod encounter_group;
pub mod hatch_session;
pub mod monster;
pub mod monster_lineage;
pub mod monster_move;
pub mod species;
pub mod submission;
pub mod trainer;
pub mod trainer_inventory;
