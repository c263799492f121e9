use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{inventory::InventoryRepository, trainer::TrainerRepository},
    engine::constants::INVENTORY_CATEGORIES,
    error::{game::GameError, AppError},
    model::trainer::{CreateTrainerParam, InventoryChange, InventoryItem, Trainer},
};

pub struct TrainerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrainerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a trainer at level 1 with no coins.
    pub async fn create(&self, param: CreateTrainerParam) -> Result<Trainer, AppError> {
        if param.name.trim().is_empty() {
            return Err(AppError::BadRequest("Trainer name is required".to_string()));
        }

        let repo = TrainerRepository::new(self.db);

        Ok(repo.create(param).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Trainer, AppError> {
        let repo = TrainerRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trainer not found".to_string()))
    }

    /// Gets a trainer and checks that `player_user_id` owns it.
    ///
    /// # Returns
    /// - `Ok(Trainer)` - The trainer
    /// - `Err(AppError::NotFound)` - No trainer with that ID
    /// - `Err(GameError::NotOwner)` - The trainer belongs to another player
    pub async fn get_owned(&self, id: i32, player_user_id: &str) -> Result<Trainer, AppError> {
        let trainer = self.get(id).await?;

        if !trainer.is_owned_by(player_user_id) {
            return Err(GameError::NotOwner.into());
        }

        Ok(trainer)
    }

    pub async fn list_by_player(&self, player_user_id: &str) -> Result<Vec<Trainer>, AppError> {
        let repo = TrainerRepository::new(self.db);

        Ok(repo.get_by_player(player_user_id).await?)
    }

    pub async fn add_levels(&self, id: i32, levels: i32) -> Result<Trainer, AppError> {
        self.get(id).await?;
        let repo = TrainerRepository::new(self.db);

        Ok(repo.add_levels(id, levels).await?)
    }

    /// Adds coins, or spends them when `amount` is negative.
    ///
    /// # Returns
    /// - `Ok(Trainer)` - The trainer with the new balance
    /// - `Err(AppError::NotFound)` - No trainer with that ID
    /// - `Err(AppError::BadRequest)` - The balance or lifetime earnings would overflow
    /// - `Err(GameError::Rule)` - Spending would take the balance below zero
    pub async fn add_coins(&self, id: i32, amount: i32) -> Result<Trainer, AppError> {
        let trainer = self.get(id).await?;

        let balance = trainer.currency_amount.checked_add(amount);
        let earned = if amount > 0 {
            trainer.total_earned_currency.checked_add(amount)
        } else {
            Some(trainer.total_earned_currency)
        };
        let Some(balance) = balance.filter(|_| earned.is_some()) else {
            return Err(AppError::BadRequest(format!(
                "{} coins can't be added to {}",
                amount, trainer.name
            )));
        };

        if balance < 0 {
            return Err(GameError::rule(format!(
                "{} only has {} coins",
                trainer.name, trainer.currency_amount
            ))
            .into());
        }

        let repo = TrainerRepository::new(self.db);

        Ok(repo.add_coins(id, amount).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.get(id).await?;
        let repo = TrainerRepository::new(self.db);

        repo.delete(id).await?;

        Ok(())
    }

    pub async fn inventory(&self, trainer_id: i32) -> Result<Vec<InventoryItem>, AppError> {
        self.get(trainer_id).await?;
        let repo = InventoryRepository::new(self.db);

        Ok(repo.get_all(trainer_id).await?)
    }

    /// Adds items to a stack, creating it when missing.
    pub async fn add_item(&self, change: InventoryChange) -> Result<InventoryItem, AppError> {
        validate_change(&change)?;
        self.get(change.trainer_id).await?;
        let repo = InventoryRepository::new(self.db);

        Ok(repo.add(change).await?)
    }

    /// Takes items from a stack.
    ///
    /// # Returns
    /// - `Ok(())` - The items were removed
    /// - `Err(GameError::MissingItem)` - The trainer holds fewer than requested
    pub async fn remove_item(&self, change: InventoryChange) -> Result<(), AppError> {
        validate_change(&change)?;
        let item_name = change.item_name.clone();
        let repo = InventoryRepository::new(self.db);

        if !repo.remove(change).await? {
            return Err(GameError::missing_item(item_name).into());
        }

        Ok(())
    }

    /// Whether the trainer holds at least `quantity` of an item.
    pub async fn has_item(
        &self,
        trainer_id: i32,
        category: &str,
        item_name: &str,
        quantity: i32,
    ) -> Result<bool, AppError> {
        let repo = InventoryRepository::new(self.db);

        let stack = repo.get(trainer_id, category, item_name).await?;

        Ok(stack.is_some_and(|s| s.quantity >= quantity))
    }

    /// Takes several items at once as `(category, item, quantity)`. Repeated
    /// items are summed, and nothing is removed unless the trainer holds every
    /// total.
    ///
    /// # Returns
    /// - `Ok(())` - Every item was removed
    /// - `Err(GameError::MissingItem)` - The first item the trainer lacks
    pub async fn consume(&self, trainer_id: i32, items: &[(&str, &str, i32)]) -> Result<(), AppError> {
        let mut totals: Vec<InventoryChange> = Vec::new();
        for (category, item_name, quantity) in items {
            let key = item_name.trim().to_lowercase();
            match totals
                .iter_mut()
                .find(|c| c.category == *category && c.item_name.to_lowercase() == key)
            {
                Some(change) => change.quantity = change.quantity.saturating_add(*quantity),
                None => totals.push(InventoryChange::new(
                    trainer_id,
                    *category,
                    item_name.trim(),
                    *quantity,
                )),
            }
        }

        for change in &totals {
            validate_change(change)?;
        }

        let txn = self.db.begin().await?;
        let mut missing = None;
        {
            let repo = InventoryRepository::new(&txn);
            for change in totals {
                let item_name = change.item_name.clone();
                if !repo.remove(change).await? {
                    missing = Some(item_name);
                    break;
                }
            }
        }

        if let Some(item_name) = missing {
            txn.rollback().await?;
            return Err(GameError::missing_item(item_name).into());
        }

        txn.commit().await?;

        Ok(())
    }
}

fn validate_change(change: &InventoryChange) -> Result<(), AppError> {
    if !INVENTORY_CATEGORIES.contains(&change.category.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Unknown inventory category: {}",
            change.category
        )));
    }
    if change.quantity <= 0 {
        return Err(AppError::BadRequest(
            "Quantity must be at least 1".to_string(),
        ));
    }
    Ok(())
}
