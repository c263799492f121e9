use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "encounter_group")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub encounter_id: i32,
    /// Zero-based position of the group within its encounter.
    pub position: i32,
    pub species: Json,
    pub types: Json,
    pub attribute: Option<String>,
    pub count: i32,
    pub level: i32,
    pub agro: i32,
    pub activity: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::encounter::Entity",
        from = "Column::EncounterId",
        to = "super::encounter::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Encounter,
}

impl Related<super::encounter::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Encounter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
