use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "boss_reward_claim")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub boss_id: i32,
    pub player_user_id: String,
    /// One of `reward_monster` or `grunt_monster`.
    pub reward_type: String,
    pub damage_dealt: i32,
    pub rank_position: i32,
    pub is_claimed: bool,
    pub claimed_at: Option<DateTimeUtc>,
    pub monster_name: Option<String>,
    pub assigned_trainer_id: Option<i32>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
