use sea_orm_migration::{prelude::*, schema::*};

use super::m20260102_000008_create_encounter_table::Encounter;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EncounterGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(EncounterGroup::Id))
                    .col(integer(EncounterGroup::EncounterId))
                    .col(integer(EncounterGroup::Position))
                    .col(json(EncounterGroup::Species))
                    .col(json(EncounterGroup::Types))
                    .col(string_null(EncounterGroup::Attribute))
                    .col(integer(EncounterGroup::Count))
                    .col(integer(EncounterGroup::Level))
                    .col(integer(EncounterGroup::Agro))
                    .col(string(EncounterGroup::Activity))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_encounter_group_encounter_id")
                            .from(EncounterGroup::Table, EncounterGroup::EncounterId)
                            .to(Encounter::Table, Encounter::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EncounterGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EncounterGroup {
    Table,
    Id,
    EncounterId,
    Position,
    Species,
    Types,
    Attribute,
    Count,
    Level,
    Agro,
    Activity,
}
