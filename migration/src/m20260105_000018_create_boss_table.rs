use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Boss::Table)
                    .if_not_exists()
                    .col(pk_auto(Boss::Id))
                    .col(string(Boss::Name))
                    .col(text_null(Boss::Description))
                    .col(string_null(Boss::ImageUrl))
                    .col(integer(Boss::TotalHp))
                    .col(integer(Boss::CurrentHp))
                    .col(integer(Boss::Month))
                    .col(integer(Boss::Year))
                    .col(string(Boss::Status).default("active"))
                    .col(timestamp(Boss::StartDate))
                    .col(
                        timestamp(Boss::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Boss::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Boss {
    Table,
    Id,
    Name,
    Description,
    ImageUrl,
    TotalHp,
    CurrentHp,
    Month,
    Year,
    Status,
    StartDate,
    CreatedAt,
}
