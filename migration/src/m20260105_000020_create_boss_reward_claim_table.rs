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
                    .table(BossRewardClaim::Table)
                    .if_not_exists()
                    .col(pk_auto(BossRewardClaim::Id))
                    .col(integer(BossRewardClaim::BossId))
                    .col(string(BossRewardClaim::PlayerUserId))
                    .col(string(BossRewardClaim::RewardType))
                    .col(integer(BossRewardClaim::DamageDealt))
                    .col(integer(BossRewardClaim::RankPosition))
                    .col(boolean(BossRewardClaim::IsClaimed).default(false))
                    .col(timestamp_null(BossRewardClaim::ClaimedAt))
                    .col(string_null(BossRewardClaim::MonsterName))
                    .col(integer_null(BossRewardClaim::AssignedTrainerId))
                    .col(
                        timestamp(BossRewardClaim::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_boss_reward_claim_boss_id")
                            .from(BossRewardClaim::Table, BossRewardClaim::BossId)
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
            .drop_table(Table::drop().table(BossRewardClaim::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BossRewardClaim {
    Table,
    Id,
    BossId,
    PlayerUserId,
    RewardType,
    DamageDealt,
    RankPosition,
    IsClaimed,
    ClaimedAt,
    MonsterName,
    AssignedTrainerId,
    CreatedAt,
}
