use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Encounter::Table)
                    .if_not_exists()
                    .col(pk_auto(Encounter::Id))
                    .col(string(Encounter::Kind))
                    .col(boolean(Encounter::AutoBattle).default(false))
                    .col(json(Encounter::NpcTrainers))
                    .col(json_null(Encounter::Item))
                    .col(
                        timestamp(Encounter::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Encounter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Encounter {
    Table,
    Id,
    Kind,
    AutoBattle,
    NpcTrainers,
    Item,
    CreatedAt,
}
