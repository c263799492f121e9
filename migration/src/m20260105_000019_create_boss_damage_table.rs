use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000018_create_boss_table::Boss;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BossDamage::Table)
                    .if_not_exists()
                    .col(pk_auto(BossDamage::Id))
                    .col(integer(BossDamage::BossId))
                    .col(string(BossDamage::PlayerUserId))
                    .col(integer(BossDamage::DamageAmount))
                    .col(integer_null(BossDamage::SubmissionId))
                    .col(
                        timestamp(BossDamage::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_boss_damage_boss_id")
                            .from(BossDamage::Table, BossDamage::BossId)
                            .to(Boss::Table, Boss::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BossDamage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BossDamage {
    Table,
    Id,
    BossId,
    PlayerUserId,
    DamageAmount,
    SubmissionId,
    CreatedAt,
}
