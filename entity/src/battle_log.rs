use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "battle_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub battle_id: i32,
    pub participant_id: Option<i32>,
    pub turn_number: i32,
    /// One of `system` or `action`.
    pub log_type: String,
    pub message: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
