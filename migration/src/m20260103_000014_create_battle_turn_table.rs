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
                    .table(BattleTurn::Table)
                    .if_not_exists()
                    .col(pk_auto(BattleTurn::Id))
                    .col(integer(BattleTurn::BattleId))
                    .col(integer(BattleTurn::TurnNumber))
                    .col(integer(BattleTurn::ParticipantId))
                    .col(integer_null(BattleTurn::BattleMonsterId))
                    .col(string(BattleTurn::ActionType))
                    .col(json(BattleTurn::ActionData))
                    .col(integer(BattleTurn::DamageDealt).default(0))
                    .col(text_null(BattleTurn::Message))
                    .col(integer(BattleTurn::WordCount).default(0))
                    .col(
                        timestamp(BattleTurn::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_battle_turn_battle_id")
                            .from(BattleTurn::Table, BattleTurn::BattleId)
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
            .drop_table(Table::drop().table(BattleTurn::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BattleTurn {
    Table,
    Id,
    BattleId,
    TurnNumber,
    ParticipantId,
    BattleMonsterId,
    ActionType,
    ActionData,
    DamageDealt,
    Message,
    WordCount,
    CreatedAt,
}
