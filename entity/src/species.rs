use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "species")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub franchise: String,
    pub name: String,
    pub type1: Option<String>,
    pub type2: Option<String>,
    pub type3: Option<String>,
    pub type4: Option<String>,
    pub type5: Option<String>,
    pub attribute: Option<String>,
    pub rank: Option<String>,
    pub stage: Option<String>,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub evolves_from: Option<String>,
    pub evolves_to: Option<String>,
    /// Comma separated species names this species can breed into.
    pub breeding_results: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
