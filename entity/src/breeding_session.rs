use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "breeding_session")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub player_user_id: String,
    pub trainer_id: i32,
    pub parent1_id: i32,
    pub parent2_id: i32,
    pub extra_items: Json,
    pub offspring: Json,
    /// JSON array of claimed offspring indexes.
    pub claimed: Json,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
