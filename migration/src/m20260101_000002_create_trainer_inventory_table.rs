use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_trainer_table::Trainer;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrainerInventory::Table)
                    .if_not_exists()
                    .col(pk_auto(TrainerInventory::Id))
                    .col(integer(TrainerInventory::TrainerId))
                    .col(string(TrainerInventory::Category))
                    .col(string(TrainerInventory::ItemName))
                    .col(integer(TrainerInventory::Quantity).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trainer_inventory_trainer_id")
                            .from(TrainerInventory::Table, TrainerInventory::TrainerId)
                            .to(Trainer::Table, Trainer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_trainer_inventory_item")
                    .table(TrainerInventory::Table)
                    .col(TrainerInventory::TrainerId)
                    .col(TrainerInventory::Category)
                    .col(TrainerInventory::ItemName)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrainerInventory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TrainerInventory {
    Table,
    Id,
    TrainerId,
    Category,
    ItemName,
    Quantity,
}
