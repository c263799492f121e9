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
                    .table(BattleLog::Table)
                    .if_not_exists()
                    .col(pk_auto(BattleLog::Id))
                    .col(integer(BattleLog::BattleId))
                    .col(integer_null(BattleLog::ParticipantId))
                    .col(integer(BattleLog::TurnNumber))
                    .col(string(BattleLog::LogType))
                    .col(text(BattleLog::Message))
                    .col(
                        timestamp(BattleLog::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_battle_log_battle_id")
                            .from(BattleLog::Table, BattleLog::BattleId)
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
            .drop_table(Table::drop().table(BattleLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BattleLog {
    Table,
    Id,
    BattleId,
    ParticipantId,
    TurnNumber,
    LogType,
    Message,
    CreatedAt,
}
