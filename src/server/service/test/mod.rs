mod battle;
mod boss;
mod breeding;
mod catalogue;
mod encounter;
mod monster;
mod nursery;
mod roller;
mod submission;
mod trainer;
