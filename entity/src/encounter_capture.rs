use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "encounter_capture")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub encounter_id: i32,
    pub group_id: i32,
    pub player_user_id: String,
    pub monster_id: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
