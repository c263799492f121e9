use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trainer::Table)
                    .if_not_exists()
                    .col(pk_auto(Trainer::Id))
                    .col(string(Trainer::PlayerUserId))
                    .col(string(Trainer::Name))
                    .col(integer(Trainer::Level).default(1))
                    .col(integer(Trainer::CurrencyAmount).default(0))
                    .col(integer(Trainer::TotalEarnedCurrency).default(0))
                    .col(
                        timestamp(Trainer::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_trainer_player_user_id")
                    .table(Trainer::Table)
                    .col(Trainer::PlayerUserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trainer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Trainer {
    Table,
    Id,
    PlayerUserId,
    Name,
    Level,
    CurrencyAmount,
    TotalEarnedCurrency,
    CreatedAt,
}
