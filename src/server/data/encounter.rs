use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use serde_json::json;

use crate::server::model::encounter::{Encounter, EncounterPlan};

/// Repository for generated encounters and their monster groups.
pub struct EncounterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EncounterRepository<'a> {
    /// Creates a new EncounterRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `EncounterRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a generated encounter, numbering its groups from zero.
    ///
    /// # Arguments
    /// - `plan` - Encounter produced by the encounter generator
    ///
    /// # Returns
    /// - `Ok(Encounter)` - The stored encounter with group IDs
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, plan: EncounterPlan) -> Result<Encounter, DbErr> {
        let item = plan.item.map(|item| json!(item));

        let encounter = entity::encounter::ActiveModel {
            kind: ActiveValue::Set(plan.kind.as_str().to_string()),
            auto_battle: ActiveValue::Set(plan.auto_battle),
            npc_trainers: ActiveValue::Set(json!(plan.npc_trainers)),
            item: ActiveValue::Set(item),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut groups = Vec::with_capacity(plan.groups.len());
        for (position, group) in plan.groups.into_iter().enumerate() {
            let group = entity::encounter_group::ActiveModel {
                encounter_id: ActiveValue::Set(encounter.id),
                position: ActiveValue::Set(position as i32),
                species: ActiveValue::Set(json!(group.species)),
                types: ActiveValue::Set(json!(group.types)),
                attribute: ActiveValue::Set(group.attribute),
                count: ActiveValue::Set(group.count),
                level: ActiveValue::Set(group.level),
                agro: ActiveValue::Set(group.agro),
                activity: ActiveValue::Set(group.activity),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            groups.push(group);
        }

        Encounter::from_entity(encounter, groups)
    }

    /// Gets an encounter with its groups ordered by position.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Encounter>, DbErr> {
        let Some(encounter) = entity::prelude::Encounter::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let groups = entity::prelude::EncounterGroup::find()
            .filter(entity::encounter_group::Column::EncounterId.eq(id))
            .order_by_asc(entity::encounter_group::Column::Position)
            .all(self.db)
            .await?;

        Encounter::from_entity(encounter, groups).map(Some)
    }
}
