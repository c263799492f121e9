pub use super::ability::Entity as Ability;
pub use super::battle::Entity as Battle;
pub use super::battle_log::Entity as BattleLog;
pub use super::battle_monster::Entity as BattleMonster;
pub use super::battle_participant::Entity as BattleParticipant;
pub use super::battle_turn::Entity as BattleTurn;
pub use super::boss::Entity as Boss;
pub use super::boss_damage::Entity as BossDamage;
pub use super::boss_reward_claim::Entity as BossRewardClaim;
pub use super::breeding_session::Entity as BreedingSession;
pub use super::encounter::Entity as Encounter;
pub use super::encounter_capture::Entity as EncounterCapture;
pub use super::encounter_group::Entity as EncounterGroup;
pub use super::hatch_session::Entity as HatchSession;
pub use super::monster::Entity as Monster;
pub use super::monster_lineage::Entity as MonsterLineage;
pub use super::monster_move::Entity as MonsterMove;
pub use super::species::Entity as Species;
pub use super::submission::Entity as Submission;
pub use super::trainer::Entity as Trainer;
pub use super::trainer_inventory::Entity as TrainerInventory;
