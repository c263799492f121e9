use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "battle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub encounter_id: Option<i32>,
    pub battle_type: String,
    pub status: String,
    pub current_turn: i32,
    pub current_participant_index: i32,
    pub weather: String,
    pub terrain: String,
    pub knockout_limit: i32,
    pub winner_type: Option<String>,
    pub created_at: DateTimeUtc,
    pub ended_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::battle_participant::Entity")]
    BattleParticipant,
}

impl Related<super::battle_participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BattleParticipant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
