use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "monster")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub trainer_id: i32,
    pub player_user_id: String,
    pub name: String,
    pub species1: String,
    pub species2: Option<String>,
    pub species3: Option<String>,
    pub type1: String,
    pub type2: Option<String>,
    pub type3: Option<String>,
    pub type4: Option<String>,
    pub type5: Option<String>,
    pub attribute: Option<String>,
    pub level: i32,
    pub hp_total: i32,
    pub atk_total: i32,
    pub def_total: i32,
    pub spa_total: i32,
    pub spd_total: i32,
    pub spe_total: i32,
    pub hp_iv: i32,
    pub atk_iv: i32,
    pub def_iv: i32,
    pub spa_iv: i32,
    pub spd_iv: i32,
    pub spe_iv: i32,
    pub hp_ev: i32,
    pub atk_ev: i32,
    pub def_ev: i32,
    pub spa_ev: i32,
    pub spd_ev: i32,
    pub spe_ev: i32,
    pub nature: String,
    pub characteristic: String,
    pub gender: String,
    pub friendship: i32,
    pub ability1: String,
    pub ability2: String,
    /// JSON array of move names.
    pub moveset: Json,
    pub where_met: String,
    pub img_link: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::trainer::Entity",
        from = "Column::TrainerId",
        to = "super::trainer::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Trainer,
}

impl Related<super::trainer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trainer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
