pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_trainer_table;
mod m20260101_000002_create_trainer_inventory_table;
mod m20260101_000003_create_monster_table;
mod m20260101_000004_create_monster_lineage_table;
mod m20260101_000005_create_species_table;
mod m20260101_000006_create_monster_move_table;
mod m20260101_000007_create_ability_table;
mod m20260102_000008_create_encounter_table;
mod m20260102_000009_create_encounter_group_table;
mod m20260102_000010_create_encounter_capture_table;
mod m20260103_000011_create_battle_table;
mod m20260103_000012_create_battle_participant_table;
mod m20260103_000013_create_battle_monster_table;
mod m20260103_000014_create_battle_turn_table;
mod m20260103_000015_create_battle_log_table;
mod m20260104_000016_create_breeding_session_table;
mod m20260104_000017_create_hatch_session_table;
mod m20260105_000018_create_boss_table;
mod m20260105_000019_create_boss_damage_table;
mod m20260105_000020_create_boss_reward_claim_table;
mod m20260106_000021_create_submission_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_trainer_table::Migration),
            Box::new(m20260101_000002_create_trainer_inventory_table::Migration),
            Box::new(m20260101_000003_create_monster_table::Migration),
            Box::new(m20260101_000004_create_monster_lineage_table::Migration),
            Box::new(m20260101_000005_create_species_table::Migration),
            Box::new(m20260101_000006_create_monster_move_table::Migration),
            Box::new(m20260101_000007_create_ability_table::Migration),
            Box::new(m20260102_000008_create_encounter_table::Migration),
            Box::new(m20260102_000009_create_encounter_group_table::Migration),
            Box::new(m20260102_000010_create_encounter_capture_table::Migration),
            Box::new(m20260103_000011_create_battle_table::Migration),
            Box::new(m20260103_000012_create_battle_participant_table::Migration),
            Box::new(m20260103_000013_create_battle_monster_table::Migration),
            Box::new(m20260103_000014_create_battle_turn_table::Migration),
            Box::new(m20260103_000015_create_battle_log_table::Migration),
            Box::new(m20260104_000016_create_breeding_session_table::Migration),
            Box::new(m20260104_000017_create_hatch_session_table::Migration),
            Box::new(m20260105_000018_create_boss_table::Migration),
            Box::new(m20260105_000019_create_boss_damage_table::Migration),
            Box::new(m20260105_000020_create_boss_reward_claim_table::Migration),
            Box::new(m20260106_000021_create_submission_table::Migration),
        ]
    }
}
