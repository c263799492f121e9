use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Repository for parent/child links between monsters.
pub struct LineageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LineageRepository<'a> {
    /// Creates a new LineageRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `LineageRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records each of `parent_ids` as a parent of `monster_id`. Links that
    /// already exist are skipped.
    pub async fn add(&self, monster_id: i32, parent_ids: &[i32]) -> Result<(), DbErr> {
        let existing = self.parent_ids(monster_id).await?;

        for parent_id in parent_ids {
            if existing.contains(parent_id) {
                continue;
            }

            entity::monster_lineage::ActiveModel {
                monster_id: ActiveValue::Set(monster_id),
                parent_id: ActiveValue::Set(*parent_id),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    pub async fn parent_ids(&self, monster_id: i32) -> Result<Vec<i32>, DbErr> {
        let links = entity::prelude::MonsterLineage::find()
            .filter(entity::monster_lineage::Column::MonsterId.eq(monster_id))
            .order_by_asc(entity::monster_lineage::Column::Id)
            .all(self.db)
            .await?;

        Ok(links.into_iter().map(|l| l.parent_id).collect())
    }

    pub async fn child_ids(&self, parent_id: i32) -> Result<Vec<i32>, DbErr> {
        let links = entity::prelude::MonsterLineage::find()
            .filter(entity::monster_lineage::Column::ParentId.eq(parent_id))
            .order_by_asc(entity::monster_lineage::Column::Id)
            .all(self.db)
            .await?;

        Ok(links.into_iter().map(|l| l.monster_id).collect())
    }
}
