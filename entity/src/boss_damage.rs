use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "boss_damage")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub boss_id: i32,
    pub player_user_id: String,
    pub damage_amount: i32,
    pub submission_id: Option<i32>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::boss::Entity",
        from = "Column::BossId",
        to = "super::boss::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Boss,
}

impl Related<super::boss::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Boss.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
