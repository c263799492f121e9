use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260102_000008_create_encounter_table::Encounter,
    m20260102_000009_create_encounter_group_table::EncounterGroup,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EncounterCapture::Table)
                    .if_not_exists()
                    .col(pk_auto(EncounterCapture::Id))
                    .col(integer(EncounterCapture::EncounterId))
                    .col(integer(EncounterCapture::GroupId))
                    .col(string(EncounterCapture::PlayerUserId))
                    .col(integer(EncounterCapture::MonsterId))
                    .col(
                        timestamp(EncounterCapture::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_encounter_capture_encounter_id")
                            .from(EncounterCapture::Table, EncounterCapture::EncounterId)
                            .to(Encounter::Table, Encounter::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_encounter_capture_group_id")
                            .from(EncounterCapture::Table, EncounterCapture::GroupId)
                            .to(EncounterGroup::Table, EncounterGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EncounterCapture::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EncounterCapture {
    Table,
    Id,
    EncounterId,
    GroupId,
    PlayerUserId,
    MonsterId,
    CreatedAt,
}
