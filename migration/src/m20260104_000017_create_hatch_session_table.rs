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
                    .table(HatchSession::Table)
                    .if_not_exists()
                    .col(pk_auto(HatchSession::Id))
                    .col(string(HatchSession::PlayerUserId))
                    .col(integer(HatchSession::TrainerId))
                    .col(json(HatchSession::Params))
                    .col(json(HatchSession::Eggs))
                    .col(json(HatchSession::Claimed))
                    .col(
                        timestamp(HatchSession::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hatch_session_trainer_id")
                            .from(HatchSession::Table, HatchSession::TrainerId)
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
            .drop_table(Table::drop().table(HatchSession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HatchSession {
    Table,
    Id,
    PlayerUserId,
    TrainerId,
    Params,
    Eggs,
    Claimed,
    CreatedAt,
}
