use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "battle_turn")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub battle_id: i32,
    pub turn_number: i32,
    pub participant_id: i32,
    pub battle_monster_id: Option<i32>,
    pub action_type: String,
    pub action_data: Json,
    pub damage_dealt: i32,
    pub message: Option<String>,
    pub word_count: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
