use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "battle_participant")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub battle_id: i32,
    /// One of `player`, `npc` or `wild`.
    pub participant_type: String,
    /// One of `players` or `opponents`.
    pub team_side: String,
    pub trainer_id: Option<i32>,
    pub player_user_id: Option<String>,
    pub trainer_name: String,
    pub turn_order: i32,
    pub is_active: bool,
    pub message_count: i32,
    pub word_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::battle::Entity",
        from = "Column::BattleId",
        to = "super::battle::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Battle,
    #[sea_orm(has_many = "super::battle_monster::Entity")]
    BattleMonster,
}

impl Related<super::battle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Battle.def()
    }
}

impl Related<super::battle_monster::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BattleMonster.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
