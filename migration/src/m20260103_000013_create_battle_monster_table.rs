use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260103_000011_create_battle_table::Battle,
    m20260103_000012_create_battle_participant_table::BattleParticipant,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BattleMonster::Table)
                    .if_not_exists()
                    .col(pk_auto(BattleMonster::Id))
                    .col(integer(BattleMonster::BattleId))
                    .col(integer(BattleMonster::ParticipantId))
                    .col(integer_null(BattleMonster::MonsterId))
                    .col(string(BattleMonster::Name))
                    .col(integer(BattleMonster::Level))
                    .col(json(BattleMonster::Types))
                    .col(string_null(BattleMonster::Attribute))
                    .col(integer(BattleMonster::MaxHp))
                    .col(integer(BattleMonster::CurrentHp))
                    .col(integer(BattleMonster::Atk))
                    .col(integer(BattleMonster::Def))
                    .col(integer(BattleMonster::Spa))
                    .col(integer(BattleMonster::Spd))
                    .col(integer(BattleMonster::Spe))
                    .col(json(BattleMonster::Moves))
                    .col(json(BattleMonster::StatusEffects))
                    .col(boolean(BattleMonster::IsActive).default(false))
                    .col(boolean(BattleMonster::IsFainted).default(false))
                    .col(integer(BattleMonster::Position))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_battle_monster_battle_id")
                            .from(BattleMonster::Table, BattleMonster::BattleId)
                            .to(Battle::Table, Battle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_battle_monster_participant_id")
                            .from(BattleMonster::Table, BattleMonster::ParticipantId)
                            .to(BattleParticipant::Table, BattleParticipant::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BattleMonster::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BattleMonster {
    Table,
    Id,
    BattleId,
    ParticipantId,
    MonsterId,
    Name,
    Level,
    Types,
    Attribute,
    MaxHp,
    CurrentHp,
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
    Moves,
    StatusEffects,
    IsActive,
    IsFainted,
    Position,
}
