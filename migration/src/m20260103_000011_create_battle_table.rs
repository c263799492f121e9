use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Battle::Table)
                    .if_not_exists()
                    .col(pk_auto(Battle::Id))
                    .col(integer_null(Battle::EncounterId))
                    .col(string(Battle::BattleType))
                    .col(string(Battle::Status).default("active"))
                    .col(integer(Battle::CurrentTurn).default(1))
                    .col(integer(Battle::CurrentParticipantIndex).default(0))
                    .col(string(Battle::Weather).default("clear"))
                    .col(string(Battle::Terrain).default("normal"))
                    .col(integer(Battle::KnockoutLimit).default(6))
                    .col(string_null(Battle::WinnerType))
                    .col(
                        timestamp(Battle::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Battle::EndedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Battle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Battle {
    Table,
    Id,
    EncounterId,
    BattleType,
    Status,
    CurrentTurn,
    CurrentParticipantIndex,
    Weather,
    Terrain,
    KnockoutLimit,
    WinnerType,
    CreatedAt,
    EndedAt,
}
