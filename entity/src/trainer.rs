use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "trainer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub player_user_id: String,
    pub name: String,
    pub level: i32,
    pub currency_amount: i32,
    pub total_earned_currency: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::trainer_inventory::Entity")]
    TrainerInventory,
    #[sea_orm(has_many = "super::monster::Entity")]
    Monster,
}

impl Related<super::trainer_inventory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainerInventory.def()
    }
}

impl Related<super::monster::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Monster.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
