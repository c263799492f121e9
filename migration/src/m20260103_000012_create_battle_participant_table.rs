use sea_orm_migration::{prelude::*, schema::*};

use super::m20260103_000011_create_battle_table::Battle;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BattleParticipant::Table)
                    .if_not_exists()
                    .col(pk_auto(BattleParticipant::Id))
                    .col(integer(BattleParticipant::BattleId))
                    .col(string(BattleParticipant::ParticipantType))
                    .col(string(BattleParticipant::TeamSide))
                    .col(integer_null(BattleParticipant::TrainerId))
                    .col(string_null(BattleParticipant::PlayerUserId))
                    .col(string(BattleParticipant::TrainerName))
                    .col(integer(BattleParticipant::TurnOrder))
                    .col(boolean(BattleParticipant::IsActive).default(true))
                    .col(integer(BattleParticipant::MessageCount).default(0))
                    .col(integer(BattleParticipant::WordCount).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_battle_participant_battle_id")
                            .from(BattleParticipant::Table, BattleParticipant::BattleId)
                            .to(Battle::Table, Battle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BattleParticipant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BattleParticipant {
    Table,
    Id,
    BattleId,
    ParticipantType,
    TeamSide,
    TrainerId,
    PlayerUserId,
    TrainerName,
    TurnOrder,
    IsActive,
    MessageCount,
    WordCount,
}
