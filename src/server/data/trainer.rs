use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::trainer::{CreateTrainerParam, Trainer};

/// Repository providing database operations for trainers.
pub struct TrainerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrainerRepository<'a> {
    /// Creates a new TrainerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `TrainerRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a trainer at level 1 with no coins.
    ///
    /// # Arguments
    /// - `param` - Owning player and trainer name
    ///
    /// # Returns
    /// - `Ok(Trainer)` - The created trainer
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateTrainerParam) -> Result<Trainer, DbErr> {
        let entity = entity::trainer::ActiveModel {
            player_user_id: ActiveValue::Set(param.player_user_id),
            name: ActiveValue::Set(param.name),
            level: ActiveValue::Set(1),
            currency_amount: ActiveValue::Set(0),
            total_earned_currency: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Trainer::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Trainer>, DbErr> {
        let entity = entity::prelude::Trainer::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Trainer::from_entity))
    }

    /// Gets all trainers of a player, oldest first.
    pub async fn get_by_player(&self, player_user_id: &str) -> Result<Vec<Trainer>, DbErr> {
        let entities = entity::prelude::Trainer::find()
            .filter(entity::trainer::Column::PlayerUserId.eq(player_user_id))
            .order_by_asc(entity::trainer::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Trainer::from_entity).collect())
    }

    /// Finds one of a player's trainers by name, ignoring case.
    ///
    /// # Arguments
    /// - `player_user_id` - Player owning the trainer
    /// - `name` - Trainer name as typed by the player
    ///
    /// # Returns
    /// - `Ok(Some(Trainer))` - A trainer with that name
    /// - `Ok(None)` - The player has no trainer with that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name_for_player(
        &self,
        player_user_id: &str,
        name: &str,
    ) -> Result<Option<Trainer>, DbErr> {
        let wanted = name.trim().to_lowercase();
        let trainers = self.get_by_player(player_user_id).await?;

        Ok(trainers
            .into_iter()
            .find(|t| t.name.to_lowercase() == wanted))
    }

    /// Adds levels to a trainer.
    ///
    /// # Returns
    /// - `Ok(Trainer)` - The updated trainer
    /// - `Err(DbErr::RecordNotFound)` - No trainer with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn add_levels(&self, id: i32, levels: i32) -> Result<Trainer, DbErr> {
        let trainer = entity::prelude::Trainer::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Trainer {} not found", id)))?;

        let level = trainer.level;
        let mut active_model: entity::trainer::ActiveModel = trainer.into();
        active_model.level = ActiveValue::Set(level + levels);

        let updated = active_model.update(self.db).await?;

        Ok(Trainer::from_entity(updated))
    }

    /// Adds coins to a trainer. Positive amounts also count towards the total
    /// earned; negative amounts spend coins.
    ///
    /// The caller checks that spending does not take the balance below zero.
    ///
    /// # Returns
    /// - `Ok(Trainer)` - The updated trainer
    /// - `Err(DbErr::RecordNotFound)` - No trainer with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn add_coins(&self, id: i32, amount: i32) -> Result<Trainer, DbErr> {
        let trainer = entity::prelude::Trainer::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Trainer {} not found", id)))?;

        let currency = trainer.currency_amount;
        let earned = trainer.total_earned_currency;
        let mut active_model: entity::trainer::ActiveModel = trainer.into();
        active_model.currency_amount = ActiveValue::Set(currency.saturating_add(amount));
        if amount > 0 {
            active_model.total_earned_currency = ActiveValue::Set(earned.saturating_add(amount));
        }

        let updated = active_model.update(self.db).await?;

        Ok(Trainer::from_entity(updated))
    }

    /// Deletes a trainer. Their monsters and inventory cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Trainer::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
