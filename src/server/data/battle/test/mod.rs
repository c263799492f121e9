use crate::server::{
    data::battle::{
        log::BattleLogRepository, monster::BattleMonsterRepository,
        participant::ParticipantRepository, BattleRepository,
    },
    engine::{
        damage::Weather,
        stats::StatBlock,
        status::{StatusEffect, StatusKind},
    },
    model::battle::{
        BattleStatus, BattleType, LogType, NewBattleMonster, NewParticipant, ParticipantType,
        TeamSide, Winner,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};


fn wild_monster(battle_id: i32, participant_id: i32, position: i32) -> NewBattleMonster {
    NewBattleMonster {
        battle_id,
        participant_id,
        monster_id: None,
        name: format!("Wild Rattata {}", position + 1),
        level: 5,
        types: vec!["Normal".to_string()],
        attribute: None,
        max_hp: 40,
        stats: StatBlock {
            hp: 40,
            atk: 20,
            def: 20,
            spa: 20,
            spd: 20,
            spe: 20,
        },
        moves: vec!["Tackle".to_string()],
        is_active: true,
        position,
    }
}
