use crate::server::{
    error::{game::GameError, AppError},
    model::submission::{
        Appearance, ArtSubmission, MonsterEntry, SubmissionInput, TrainerEntry, WritingSubmission,
    },
    service::{monster::MonsterService, submission::SubmissionService, trainer::TrainerService},
};
use test_utils::{builder::TestBuilder, factory};

mod apply;
mod art_rewards;
mod writing_rewards;

fn trainer_entry(trainer_id: i32) -> TrainerEntry {
    TrainerEntry {
        trainer_id,
        appearances: Vec::new(),
        custom_levels: 0,
        is_owned: true,
    }
}

fn monster_entry(monster_id: i32) -> MonsterEntry {
    MonsterEntry {
        monster_id,
        trainer_id: None,
        appearances: Vec::new(),
        complexity_bonus: 0,
        custom_levels: 0,
        is_owned: true,
        current_level: None,
    }
}

fn writing(word_count: i32, trainers: Vec<TrainerEntry>, monsters: Vec<MonsterEntry>) -> WritingSubmission {
    WritingSubmission {
        word_count,
        trainers,
        monsters,
        npcs: Vec::new(),
    }
}
