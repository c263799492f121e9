use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::monster::{Monster, MonsterProfile};

/// Repository providing database operations for monsters.
pub struct MonsterRepository<'a> {
    db: &'a DatabaseConnection,
}

/// Copies a profile onto an active model. Species beyond three and types
/// beyond five are dropped.
fn apply_profile(active_model: &mut entity::monster::ActiveModel, profile: &MonsterProfile) {
    let species = |i: usize| profile.species.get(i).cloned();
    let types = |i: usize| profile.types.get(i).cloned();

    active_model.name = ActiveValue::Set(profile.name.clone());
    active_model.species1 = ActiveValue::Set(species(0).unwrap_or_default());
    active_model.species2 = ActiveValue::Set(species(1));
    active_model.species3 = ActiveValue::Set(species(2));
    active_model.type1 = ActiveValue::Set(types(0).unwrap_or_default());
    active_model.type2 = ActiveValue::Set(types(1));
    active_model.type3 = ActiveValue::Set(types(2));
    active_model.type4 = ActiveValue::Set(types(3));
    active_model.type5 = ActiveValue::Set(types(4));
    active_model.attribute = ActiveValue::Set(profile.attribute.clone());
    active_model.level = ActiveValue::Set(profile.level);

    active_model.hp_total = ActiveValue::Set(profile.stats.hp);
    active_model.atk_total = ActiveValue::Set(profile.stats.atk);
    active_model.def_total = ActiveValue::Set(profile.stats.def);
    active_model.spa_total = ActiveValue::Set(profile.stats.spa);
    active_model.spd_total = ActiveValue::Set(profile.stats.spd);
    active_model.spe_total = ActiveValue::Set(profile.stats.spe);
    active_model.hp_iv = ActiveValue::Set(profile.ivs.hp);
    active_model.atk_iv = ActiveValue::Set(profile.ivs.atk);
    active_model.def_iv = ActiveValue::Set(profile.ivs.def);
    active_model.spa_iv = ActiveValue::Set(profile.ivs.spa);
    active_model.spd_iv = ActiveValue::Set(profile.ivs.spd);
    active_model.spe_iv = ActiveValue::Set(profile.ivs.spe);
    active_model.hp_ev = ActiveValue::Set(profile.evs.hp);
    active_model.atk_ev = ActiveValue::Set(profile.evs.atk);
    active_model.def_ev = ActiveValue::Set(profile.evs.def);
    active_model.spa_ev = ActiveValue::Set(profile.evs.spa);
    active_model.spd_ev = ActiveValue::Set(profile.evs.spd);
    active_model.spe_ev = ActiveValue::Set(profile.evs.spe);

    active_model.nature = ActiveValue::Set(profile.nature.clone());
    active_model.characteristic = ActiveValue::Set(profile.characteristic.clone());
    active_model.gender = ActiveValue::Set(profile.gender.clone());
    active_model.friendship = ActiveValue::Set(profile.friendship);
    active_model.ability1 = ActiveValue::Set(profile.ability1.clone());
    active_model.ability2 = ActiveValue::Set(profile.ability2.clone());
    active_model.moveset = ActiveValue::Set(serde_json::json!(profile.moveset));
    active_model.where_met = ActiveValue::Set(profile.where_met.clone());
    active_model.img_link = ActiveValue::Set(profile.img_link.clone());
}

impl<'a> MonsterRepository<'a> {
    /// Creates a new MonsterRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `MonsterRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores an initialized monster for a trainer.
    ///
    /// # Arguments
    /// - `trainer_id` - Trainer who owns the monster
    /// - `player_user_id` - Player who owns the trainer
    /// - `profile` - Rolled game data of the monster
    ///
    /// # Returns
    /// - `Ok(Monster)` - The stored monster
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        trainer_id: i32,
        player_user_id: &str,
        profile: &MonsterProfile,
    ) -> Result<Monster, DbErr> {
        let mut active_model = entity::monster::ActiveModel {
            trainer_id: ActiveValue::Set(trainer_id),
            player_user_id: ActiveValue::Set(player_user_id.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };
        apply_profile(&mut active_model, profile);

        let entity = active_model.insert(self.db).await?;

        Monster::from_entity(entity)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Monster>, DbErr> {
        entity::prelude::Monster::find_by_id(id)
            .one(self.db)
            .await?
            .map(Monster::from_entity)
            .transpose()
    }

    /// Gets monsters by ID, in ID order. Unknown IDs are skipped.
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Monster>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Monster::find()
            .filter(entity::monster::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::monster::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Monster::from_entity)
            .collect()
    }

    /// Gets all monsters of a trainer, in ID order.
    pub async fn get_by_trainer(&self, trainer_id: i32) -> Result<Vec<Monster>, DbErr> {
        entity::prelude::Monster::find()
            .filter(entity::monster::Column::TrainerId.eq(trainer_id))
            .order_by_asc(entity::monster::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Monster::from_entity)
            .collect()
    }

    /// Finds one of a trainer's monsters by name, ignoring case.
    pub async fn find_by_name_for_trainer(
        &self,
        trainer_id: i32,
        name: &str,
    ) -> Result<Option<Monster>, DbErr> {
        let wanted = name.trim().to_lowercase();
        let monsters = self.get_by_trainer(trainer_id).await?;

        Ok(monsters
            .into_iter()
            .find(|m| m.name().to_lowercase() == wanted))
    }

    /// Overwrites a monster's game data, e.g. after a level up.
    ///
    /// # Returns
    /// - `Ok(Monster)` - The updated monster
    /// - `Err(DbErr::RecordNotFound)` - No monster with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(&self, id: i32, profile: &MonsterProfile) -> Result<Monster, DbErr> {
        let monster = entity::prelude::Monster::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Monster {} not found", id)))?;

        let mut active_model: entity::monster::ActiveModel = monster.into();
        apply_profile(&mut active_model, profile);

        let updated = active_model.update(self.db).await?;

        Monster::from_entity(updated)
    }

    pub async fn rename(&self, id: i32, name: String) -> Result<Monster, DbErr> {
        let monster = entity::prelude::Monster::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Monster {} not found", id)))?;

        let mut active_model: entity::monster::ActiveModel = monster.into();
        active_model.name = ActiveValue::Set(name);

        let updated = active_model.update(self.db).await?;

        Monster::from_entity(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Monster::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
