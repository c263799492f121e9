use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MonsterLineage::Table)
                    .if_not_exists()
                    .col(pk_auto(MonsterLineage::Id))
                    .col(integer(MonsterLineage::MonsterId))
                    .col(integer(MonsterLineage::ParentId))
                    .col(
                        timestamp(MonsterLineage::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MonsterLineage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MonsterLineage {
    Table,
    Id,
    MonsterId,
    ParentId,
    CreatedAt,
}
