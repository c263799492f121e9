use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Trainer, Monster};
///
/// let test = TestBuilder::new()
///     .with_table(Trainer)
///     .with_table(Monster)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys should be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the trainer, inventory and monster tables.
    pub fn with_trainer_tables(self) -> Self {
        self.with_table(Trainer)
            .with_table(TrainerInventory)
            .with_table(Monster)
            .with_table(MonsterLineage)
    }

    /// Adds the catalogue tables used when generating monsters.
    ///
    /// - Species
    /// - MonsterMove
    /// - Ability
    pub fn with_catalogue_tables(self) -> Self {
        self.with_table(Species)
            .with_table(MonsterMove)
            .with_table(Ability)
    }

    /// Adds trainer and catalogue tables together with breeding and hatch sessions.
    pub fn with_session_tables(self) -> Self {
        self.with_trainer_tables()
            .with_catalogue_tables()
            .with_table(BreedingSession)
            .with_table(HatchSession)
    }

    /// Adds encounter tables along with everything needed to capture monsters.
    pub fn with_encounter_tables(self) -> Self {
        self.with_trainer_tables()
            .with_catalogue_tables()
            .with_table(Encounter)
            .with_table(EncounterGroup)
            .with_table(EncounterCapture)
    }

    /// Adds every table a battle touches.
    ///
    /// This includes the encounter tables since battles are started from
    /// encounters and balls thrown in battle record captures.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_battle_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_battle_tables(self) -> Self {
        self.with_encounter_tables()
            .with_table(Battle)
            .with_table(BattleParticipant)
            .with_table(BattleMonster)
            .with_table(BattleTurn)
            .with_table(BattleLog)
    }

    /// Adds boss tables.
    pub fn with_boss_tables(self) -> Self {
        self.with_table(Boss)
            .with_table(BossDamage)
            .with_table(BossRewardClaim)
    }

    /// Adds every table needed to apply submission rewards, which touch
    /// trainers, monsters and bosses.
    pub fn with_submission_tables(self) -> Self {
        self.with_trainer_tables()
            .with_catalogue_tables()
            .with_boss_tables()
            .with_table(Submission)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
