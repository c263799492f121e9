use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "encounter")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// One of `wild`, `battle` or `item`.
    pub kind: String,
    pub auto_battle: bool,
    /// JSON array of `{ name, level }` NPC trainers for battle encounters.
    pub npc_trainers: Json,
    pub item: Option<Json>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::encounter_group::Entity")]
    EncounterGroup,
}

impl Related<super::encounter_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EncounterGroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
