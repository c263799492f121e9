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
                    .table(BreedingSession::Table)
                    .if_not_exists()
                    .col(pk_auto(BreedingSession::Id))
                    .col(string(BreedingSession::PlayerUserId))
                    .col(integer(BreedingSession::TrainerId))
                    .col(integer(BreedingSession::Parent1Id))
                    .col(integer(BreedingSession::Parent2Id))
                    .col(json(BreedingSession::ExtraItems))
                    .col(json(BreedingSession::Offspring))
                    .col(json(BreedingSession::Claimed))
                    .col(
                        timestamp(BreedingSession::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_breeding_session_trainer_id")
                            .from(BreedingSession::Table, BreedingSession::TrainerId)
                            .to(Trainer::Table, Trainer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BreedingSession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BreedingSession {
    Table,
    Id,
    PlayerUserId,
    TrainerId,
    Parent1Id,
    Parent2Id,
    ExtraItems,
    Offspring,
    Claimed,
    CreatedAt,
}
