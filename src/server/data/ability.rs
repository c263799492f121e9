use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::catalogue::{Ability, CreateAbilityParam};

pub struct AbilityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AbilityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateAbilityParam) -> Result<Ability, DbErr> {
        let entity = entity::ability::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Ability::from_entity(entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Ability>, DbErr> {
        let entities = entity::prelude::Ability::find()
            .order_by_asc(entity::ability::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Ability::from_entity).collect())
    }
}
