use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::trainer::{InventoryChange, InventoryItem};

/// Repository for trainer inventory stacks.
///
/// Each trainer holds at most one row per category and item name. Stacks are
/// created on first add and deleted once their quantity reaches zero. Item
/// names match regardless of case.
///
/// Works over a connection or a transaction.
pub struct InventoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InventoryRepository<'a, C> {
    /// Creates a new InventoryRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `InventoryRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every stack a trainer holds, ordered by category then item name.
    pub async fn get_all(&self, trainer_id: i32) -> Result<Vec<InventoryItem>, DbErr> {
        let entities = entity::prelude::TrainerInventory::find()
            .filter(entity::trainer_inventory::Column::TrainerId.eq(trainer_id))
            .order_by_asc(entity::trainer_inventory::Column::Category)
            .order_by_asc(entity::trainer_inventory::Column::ItemName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(InventoryItem::from_entity).collect())
    }

    async fn find_entity(
        &self,
        trainer_id: i32,
        category: &str,
        item_name: &str,
    ) -> Result<Option<entity::trainer_inventory::Model>, DbErr> {
        entity::prelude::TrainerInventory::find()
            .filter(entity::trainer_inventory::Column::TrainerId.eq(trainer_id))
            .filter(entity::trainer_inventory::Column::Category.eq(category))
            .filter(item_name_is(item_name))
            .one(self.db)
            .await
    }

    /// Gets one stack by category and item name.
    pub async fn get(
        &self,
        trainer_id: i32,
        category: &str,
        item_name: &str,
    ) -> Result<Option<InventoryItem>, DbErr> {
        let entity = self.find_entity(trainer_id, category, item_name).await?;

        Ok(entity.map(InventoryItem::from_entity))
    }

    /// Finds a stack by item name in any category.
    ///
    /// Used for battle items, where the player names the item but not its
    /// category.
    pub async fn find_by_name(
        &self,
        trainer_id: i32,
        item_name: &str,
    ) -> Result<Option<InventoryItem>, DbErr> {
        let entity = entity::prelude::TrainerInventory::find()
            .filter(entity::trainer_inventory::Column::TrainerId.eq(trainer_id))
            .filter(item_name_is(item_name))
            .one(self.db)
            .await?;

        Ok(entity.map(InventoryItem::from_entity))
    }

    /// Adds items to a trainer, creating the stack if needed.
    ///
    /// # Arguments
    /// - `change` - Trainer, category, item and quantity to add
    ///
    /// # Returns
    /// - `Ok(InventoryItem)` - The stack after the addition
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn add(&self, change: InventoryChange) -> Result<InventoryItem, DbErr> {
        let existing = self
            .find_entity(change.trainer_id, &change.category, &change.item_name)
            .await?;

        let entity = match existing {
            Some(stack) => {
                let quantity = stack.quantity;
                let mut active_model: entity::trainer_inventory::ActiveModel = stack.into();
                active_model.quantity = ActiveValue::Set(quantity + change.quantity);
                active_model.update(self.db).await?
            }
            None => {
                entity::trainer_inventory::ActiveModel {
                    trainer_id: ActiveValue::Set(change.trainer_id),
                    category: ActiveValue::Set(change.category),
                    item_name: ActiveValue::Set(change.item_name),
                    quantity: ActiveValue::Set(change.quantity),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(InventoryItem::from_entity(entity))
    }

    /// Removes items from a trainer. A stack that reaches zero is deleted.
    ///
    /// # Arguments
    /// - `change` - Trainer, category, item and quantity to remove
    ///
    /// # Returns
    /// - `Ok(true)` - The items were removed
    /// - `Ok(false)` - The trainer does not hold enough; nothing changed
    /// - `Err(DbErr)` - Database error during update or delete
    pub async fn remove(&self, change: InventoryChange) -> Result<bool, DbErr> {
        let Some(stack) = self
            .find_entity(change.trainer_id, &change.category, &change.item_name)
            .await?
        else {
            return Ok(false);
        };

        if stack.quantity < change.quantity {
            return Ok(false);
        }

        let remaining = stack.quantity - change.quantity;
        if remaining == 0 {
            entity::prelude::TrainerInventory::delete_by_id(stack.id)
                .exec(self.db)
                .await?;
        } else {
            let mut active_model: entity::trainer_inventory::ActiveModel = stack.into();
            active_model.quantity = ActiveValue::Set(remaining);
            active_model.update(self.db).await?;
        }

        Ok(true)
    }
}

fn item_name_is(item_name: &str) -> Expr {
    Expr::expr(Func::lower(Expr::col(
        entity::trainer_inventory::Column::ItemName,
    )))
    .eq(item_name.trim().to_lowercase())
}
