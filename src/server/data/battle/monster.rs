use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use serde_json::json;

use crate::server::model::battle::{BattleMonster, NewBattleMonster};

/// Repository for the monsters fielded in battles.
pub struct BattleMonsterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BattleMonsterRepository<'a> {
    /// Creates a new BattleMonsterRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BattleMonsterRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Puts a monster into a battle at full HP with no status effects.
    pub async fn create(&self, param: NewBattleMonster) -> Result<BattleMonster, DbErr> {
        let entity = entity::battle_monster::ActiveModel {
            battle_id: ActiveValue::Set(param.battle_id),
            participant_id: ActiveValue::Set(param.participant_id),
            monster_id: ActiveValue::Set(param.monster_id),
            name: ActiveValue::Set(param.name),
            level: ActiveValue::Set(param.level),
            types: ActiveValue::Set(json!(param.types)),
            attribute: ActiveValue::Set(param.attribute),
            max_hp: ActiveValue::Set(param.max_hp),
            current_hp: ActiveValue::Set(param.max_hp),
            atk: ActiveValue::Set(param.stats.atk),
            def: ActiveValue::Set(param.stats.def),
            spa: ActiveValue::Set(param.stats.spa),
            spd: ActiveValue::Set(param.stats.spd),
            spe: ActiveValue::Set(param.stats.spe),
            moves: ActiveValue::Set(json!(param.moves)),
            status_effects: ActiveValue::Set(json!([])),
            is_active: ActiveValue::Set(param.is_active),
            is_fainted: ActiveValue::Set(false),
            position: ActiveValue::Set(param.position),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        BattleMonster::from_entity(entity)
    }

    /// Gets every monster in a battle, by participant then position.
    pub async fn get_by_battle(&self, battle_id: i32) -> Result<Vec<BattleMonster>, DbErr> {
        entity::prelude::BattleMonster::find()
            .filter(entity::battle_monster::Column::BattleId.eq(battle_id))
            .order_by_asc(entity::battle_monster::Column::ParticipantId)
            .order_by_asc(entity::battle_monster::Column::Position)
            .all(self.db)
            .await?
            .into_iter()
            .map(BattleMonster::from_entity)
            .collect()
    }

    /// Persists the parts of a battle monster that change during a battle:
    /// HP, status effects and whether it is active or fainted.
    ///
    /// # Returns
    /// - `Ok(BattleMonster)` - The saved monster
    /// - `Err(DbErr::RecordNotFound)` - No battle monster with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn save(&self, monster: &BattleMonster) -> Result<BattleMonster, DbErr> {
        let entity = entity::prelude::BattleMonster::find_by_id(monster.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Battle monster {} not found",
                monster.id
            )))?;

        let mut active_model: entity::battle_monster::ActiveModel = entity.into();
        active_model.current_hp = ActiveValue::Set(monster.current_hp.clamp(0, monster.max_hp));
        active_model.status_effects = ActiveValue::Set(json!(monster.status_effects));
        active_model.is_active = ActiveValue::Set(monster.is_active);
        active_model.is_fainted = ActiveValue::Set(monster.is_fainted);

        let updated = active_model.update(self.db).await?;

        BattleMonster::from_entity(updated)
    }
}
