use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::catalogue::{CreateMoveParam, Move};

pub struct MoveRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MoveRepository<'a> {
    /// Creates a new MoveRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `MoveRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateMoveParam) -> Result<Move, DbErr> {
        let entity = entity::monster_move::ActiveModel {
            name: ActiveValue::Set(param.name),
            move_type: ActiveValue::Set(param.move_type),
            category: ActiveValue::Set(param.category),
            power: ActiveValue::Set(param.power),
            accuracy: ActiveValue::Set(param.accuracy),
            description: ActiveValue::Set(param.description),
            effect_chance: ActiveValue::Set(param.effect_chance),
            attribute: ActiveValue::Set(param.attribute),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Move::from_entity(entity))
    }

    /// Gets a move by name, ignoring case.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Move>, DbErr> {
        let entity = entity::prelude::MonsterMove::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::monster_move::Column::Name)))
                    .eq(name.trim().to_lowercase()),
            )
            .one(self.db)
            .await?;

        Ok(entity.map(Move::from_entity))
    }

    /// Lists every move ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Move>, DbErr> {
        let entities = entity::prelude::MonsterMove::find()
            .order_by_asc(entity::monster_move::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Move::from_entity).collect())
    }

    /// Lists moves of one of the given types.
    pub async fn get_by_types(&self, types: &[String]) -> Result<Vec<Move>, DbErr> {
        if types.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::MonsterMove::find()
            .filter(entity::monster_move::Column::MoveType.is_in(types.to_vec()))
            .order_by_asc(entity::monster_move::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Move::from_entity).collect())
    }
}
