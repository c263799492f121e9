mod breeding_session;
mod capture;
mod encounter;
mod hatch_session;
mod inventory;
mod lineage;
mod monster;
mod monster_move;
mod species;
mod submission;
mod trainer;
