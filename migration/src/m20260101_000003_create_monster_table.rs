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
                    .table(Monster::Table)
                    .if_not_exists()
                    .col(pk_auto(Monster::Id))
                    .col(integer(Monster::TrainerId))
                    .col(string(Monster::PlayerUserId))
                    .col(string(Monster::Name))
                    .col(string(Monster::Species1))
                    .col(string_null(Monster::Species2))
                    .col(string_null(Monster::Species3))
                    .col(string(Monster::Type1))
                    .col(string_null(Monster::Type2))
                    .col(string_null(Monster::Type3))
                    .col(string_null(Monster::Type4))
                    .col(string_null(Monster::Type5))
                    .col(string_null(Monster::Attribute))
                    .col(integer(Monster::Level).default(1))
                    .col(integer(Monster::HpTotal))
                    .col(integer(Monster::AtkTotal))
                    .col(integer(Monster::DefTotal))
                    .col(integer(Monster::SpaTotal))
                    .col(integer(Monster::SpdTotal))
                    .col(integer(Monster::SpeTotal))
                    .col(integer(Monster::HpIv))
                    .col(integer(Monster::AtkIv))
                    .col(integer(Monster::DefIv))
                    .col(integer(Monster::SpaIv))
                    .col(integer(Monster::SpdIv))
                    .col(integer(Monster::SpeIv))
                    .col(integer(Monster::HpEv).default(0))
                    .col(integer(Monster::AtkEv).default(0))
                    .col(integer(Monster::DefEv).default(0))
                    .col(integer(Monster::SpaEv).default(0))
                    .col(integer(Monster::SpdEv).default(0))
                    .col(integer(Monster::SpeEv).default(0))
                    .col(string(Monster::Nature))
                    .col(string(Monster::Characteristic))
                    .col(string(Monster::Gender))
                    .col(integer(Monster::Friendship).default(0))
                    .col(string(Monster::Ability1))
                    .col(string(Monster::Ability2))
                    .col(json(Monster::Moveset))
                    .col(string(Monster::WhereMet))
                    .col(string_null(Monster::ImgLink))
                    .col(
                        timestamp(Monster::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_monster_trainer_id")
                            .from(Monster::Table, Monster::TrainerId)
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
            .drop_table(Table::drop().table(Monster::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Monster {
    Table,
    Id,
    TrainerId,
    PlayerUserId,
    Name,
    Species1,
    Species2,
    Species3,
    Type1,
    Type2,
    Type3,
    Type4,
    Type5,
    Attribute,
    Level,
    HpTotal,
    AtkTotal,
    DefTotal,
    SpaTotal,
    SpdTotal,
    SpeTotal,
    HpIv,
    AtkIv,
    DefIv,
    SpaIv,
    SpdIv,
    SpeIv,
    HpEv,
    AtkEv,
    DefEv,
    SpaEv,
    SpdEv,
    SpeEv,
    Nature,
    Characteristic,
    Gender,
    Friendship,
    Ability1,
    Ability2,
    Moveset,
    WhereMet,
    ImgLink,
    CreatedAt,
}
