//! Monster factory for creating owned test monsters.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, IntoActiveModel};

/// Factory for creating monsters owned by a trainer.
///
/// Defaults come from `fixture::monster::entity()` with the owner copied from
/// the trainer and a unique name.
pub struct MonsterFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::monster::Model,
}

impl<'a> MonsterFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, trainer: &entity::trainer::Model) -> Self {
        let id = next_id();
        let entity = fixture::monster::entity_builder()
            .trainer_id(trainer.id)
            .player_user_id(trainer.player_user_id.clone())
            .name(format!("Monster {}", id))
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn species1(mut self, species: impl Into<String>) -> Self {
        self.entity.species1 = species.into();
        self
    }

    pub fn species2(mut self, species: Option<&str>) -> Self {
        self.entity.species2 = species.map(str::to_string);
        self
    }

    pub fn type1(mut self, type1: impl Into<String>) -> Self {
        self.entity.type1 = type1.into();
        self
    }

    pub fn type2(mut self, type2: Option<&str>) -> Self {
        self.entity.type2 = type2.map(str::to_string);
        self
    }

    pub fn attribute(mut self, attribute: Option<&str>) -> Self {
        self.entity.attribute = attribute.map(str::to_string);
        self
    }

    pub fn level(mut self, level: i32) -> Self {
        self.entity.level = level;
        self
    }

    pub fn hp_total(mut self, hp_total: i32) -> Self {
        self.entity.hp_total = hp_total;
        self
    }

    /// Sets atk, def, spa, spd and spe to the same value.
    pub fn stat(mut self, stat: i32) -> Self {
        self.entity.atk_total = stat;
        self.entity.def_total = stat;
        self.entity.spa_total = stat;
        self.entity.spd_total = stat;
        self.entity.spe_total = stat;
        self
    }

    pub fn moveset(mut self, moves: &[&str]) -> Self {
        self.entity.moveset = serde_json::json!(moves);
        self
    }

    /// Builds and inserts the monster entity into the database.
    pub async fn build(self) -> Result<entity::monster::Model, DbErr> {
        let mut active = self.entity.into_active_model();
        active.id = sea_orm::ActiveValue::NotSet;
        active.insert(self.db).await
    }
}

/// Creates a default level 10 Pikachu owned by the trainer.
pub async fn create_monster(
    db: &DatabaseConnection,
    trainer: &entity::trainer::Model,
) -> Result<entity::monster::Model, DbErr> {
    MonsterFactory::new(db, trainer).build().await
}
