use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "hatch_session")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub player_user_id: String,
    pub trainer_id: i32,
    /// Hatch parameters kept for rerolls.
    pub params: Json,
    pub eggs: Json,
    /// JSON array of `[egg_index, option_index]` pairs.
    pub claimed: Json,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
