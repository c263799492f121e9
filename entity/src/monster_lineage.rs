use sea_orm::entity::prelude::*;

/// Parent link for a bred monster. Parents may have been released since, so
/// neither column is constrained.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "monster_lineage")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub monster_id: i32,
    pub parent_id: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
