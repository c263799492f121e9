//! Monthly boss repositories.
//!
//! `BossRepository` manages the boss rows themselves. Damage records and reward
//! claims live in the `damage` and `reward_claim` submodules.

pub mod damage;
pub mod reward_claim;

#[cfg(test)]
mod test;

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::boss::{Boss, CreateBossParam, STATUS_ACTIVE, STATUS_DEFEATED};

pub struct BossRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BossRepository<'a, C> {
    /// Creates a new BossRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BossRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an active boss at full HP starting now.
    pub async fn create(&self, param: CreateBossParam) -> Result<Boss, DbErr> {
        let now = Utc::now();
        let entity = entity::boss::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            image_url: ActiveValue::Set(param.image_url),
            total_hp: ActiveValue::Set(param.total_hp),
            current_hp: ActiveValue::Set(param.total_hp),
            month: ActiveValue::Set(param.month),
            year: ActiveValue::Set(param.year),
            status: ActiveValue::Set(STATUS_ACTIVE.to_string()),
            start_date: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Boss::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Boss>, DbErr> {
        let entity = entity::prelude::Boss::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Boss::from_entity))
    }

    /// Gets the newest active boss.
    pub async fn get_active(&self) -> Result<Option<Boss>, DbErr> {
        let entity = entity::prelude::Boss::find()
            .filter(entity::boss::Column::Status.eq(STATUS_ACTIVE))
            .order_by_desc(entity::boss::Column::CreatedAt)
            .order_by_desc(entity::boss::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Boss::from_entity))
    }

    /// Lists defeated bosses, most recent first.
    pub async fn get_defeated(&self) -> Result<Vec<Boss>, DbErr> {
        let entities = entity::prelude::Boss::find()
            .filter(entity::boss::Column::Status.eq(STATUS_DEFEATED))
            .order_by_desc(entity::boss::Column::Year)
            .order_by_desc(entity::boss::Column::Month)
            .order_by_desc(entity::boss::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Boss::from_entity).collect())
    }

    /// Takes `amount` HP off an active boss, never below zero. The hit that
    /// brings the boss to zero marks it defeated.
    ///
    /// Both steps are single conditional updates, so concurrent hits never
    /// lose damage and only one of them sees the defeat. Run it in a
    /// transaction to keep the unclamped HP from being read in between.
    ///
    /// # Returns
    /// - `Ok((Boss, true))` - The boss after the damage; this hit defeated it
    /// - `Ok((Boss, false))` - The boss after the damage, still active
    /// - `Err(DbErr::RecordNotFound)` - No active boss with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn apply_damage(&self, id: i32, amount: i32) -> Result<(Boss, bool), DbErr> {
        let hit = entity::prelude::Boss::update_many()
            .col_expr(
                entity::boss::Column::CurrentHp,
                Expr::col(entity::boss::Column::CurrentHp).sub(Ord::max(amount, 0)),
            )
            .filter(entity::boss::Column::Id.eq(id))
            .filter(entity::boss::Column::Status.eq(STATUS_ACTIVE))
            .exec(self.db)
            .await?;
        if hit.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!("Active boss {} not found", id)));
        }

        let defeat = entity::prelude::Boss::update_many()
            .col_expr(entity::boss::Column::CurrentHp, Expr::value(0))
            .col_expr(entity::boss::Column::Status, Expr::value(STATUS_DEFEATED))
            .filter(entity::boss::Column::Id.eq(id))
            .filter(entity::boss::Column::Status.eq(STATUS_ACTIVE))
            .filter(entity::boss::Column::CurrentHp.lte(0))
            .exec(self.db)
            .await?;

        let boss = entity::prelude::Boss::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Boss {} not found", id)))?;

        Ok((Boss::from_entity(boss), defeat.rows_affected == 1))
    }
}
