use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "boss")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub total_hp: i32,
    pub current_hp: i32,
    pub month: i32,
    pub year: i32,
    /// One of `active` or `defeated`.
    pub status: String,
    pub start_date: DateTimeUtc,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::boss_damage::Entity")]
    BossDamage,
}

impl Related<super::boss_damage::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BossDamage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
