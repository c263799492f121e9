use sea_orm::entity::prelude::*;

/// Snapshot of a monster taking part in a battle. Generated wild and NPC
/// monsters have no `monster_id`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "battle_monster")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub battle_id: i32,
    pub participant_id: i32,
    pub monster_id: Option<i32>,
    pub name: String,
    pub level: i32,
    pub types: Json,
    pub attribute: Option<String>,
    pub max_hp: i32,
    pub current_hp: i32,
    pub atk: i32,
    pub def: i32,
    pub spa: i32,
    pub spd: i32,
    pub spe: i32,
    pub moves: Json,
    pub status_effects: Json,
    pub is_active: bool,
    pub is_fainted: bool,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::battle_participant::Entity",
        from = "Column::ParticipantId",
        to = "super::battle_participant::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    BattleParticipant,
}

impl Related<super::battle_participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BattleParticipant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
