use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Species::Table)
                    .if_not_exists()
                    .col(pk_auto(Species::Id))
                    .col(string(Species::Franchise))
                    .col(string(Species::Name))
                    .col(string_null(Species::Type1))
                    .col(string_null(Species::Type2))
                    .col(string_null(Species::Type3))
                    .col(string_null(Species::Type4))
                    .col(string_null(Species::Type5))
                    .col(string_null(Species::Attribute))
                    .col(string_null(Species::Rank))
                    .col(string_null(Species::Stage))
                    .col(boolean(Species::IsLegendary).default(false))
                    .col(boolean(Species::IsMythical).default(false))
                    .col(string_null(Species::EvolvesFrom))
                    .col(string_null(Species::EvolvesTo))
                    .col(text_null(Species::BreedingResults))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_species_franchise_name")
                    .table(Species::Table)
                    .col(Species::Franchise)
                    .col(Species::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Species::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Species {
    Table,
    Id,
    Franchise,
    Name,
    Type1,
    Type2,
    Type3,
    Type4,
    Type5,
    Attribute,
    Rank,
    Stage,
    IsLegendary,
    IsMythical,
    EvolvesFrom,
    EvolvesTo,
    BreedingResults,
}
