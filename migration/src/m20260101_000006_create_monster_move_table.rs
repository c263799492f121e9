use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MonsterMove::Table)
                    .if_not_exists()
                    .col(pk_auto(MonsterMove::Id))
                    .col(string_uniq(MonsterMove::Name))
                    .col(string(MonsterMove::MoveType))
                    .col(string(MonsterMove::Category))
                    .col(integer_null(MonsterMove::Power))
                    .col(integer_null(MonsterMove::Accuracy))
                    .col(text_null(MonsterMove::Description))
                    .col(integer_null(MonsterMove::EffectChance))
                    .col(string_null(MonsterMove::Attribute))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MonsterMove::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MonsterMove {
    Table,
    Id,
    Name,
    MoveType,
    Category,
    Power,
    Accuracy,
    Description,
    EffectChance,
    Attribute,
}
