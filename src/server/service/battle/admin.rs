//! Battle conditions set by an admin.

use crate::server::{
    data::battle::BattleRepository,
    engine::damage::{Terrain, Weather},
    error::AppError,
    model::battle::{BattleState, LogType},
};

use super::BattleService;

impl<'a> BattleService<'a> {
    /// # Returns
    /// - `Ok(BattleState)` - The battle with the new weather
    /// - `Err(AppError::BadRequest)` - Unknown weather
    /// - `Err(GameError::BattleNotActive)` - The battle has ended
    pub async fn set_weather(&self, battle_id: i32, weather: &str) -> Result<BattleState, AppError> {
        let weather = Weather::parse(weather).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Unknown weather: {}. Use one of: {}",
                weather.trim(),
                Weather::ALL.map(|w| w.as_str()).join(", ")
            ))
        })?;
        let state = self.active_state(battle_id).await?;

        BattleRepository::new(self.db)
            .set_weather(battle_id, weather)
            .await?;
        self.log(
            &state,
            None,
            LogType::System,
            format!("The weather changed to {}!", weather.as_str()),
        )
        .await?;

        self.state(battle_id).await
    }

    /// # Returns
    /// - `Ok(BattleState)` - The battle with the new terrain
    /// - `Err(AppError::BadRequest)` - Unknown terrain
    /// - `Err(GameError::BattleNotActive)` - The battle has ended
    pub async fn set_terrain(&self, battle_id: i32, terrain: &str) -> Result<BattleState, AppError> {
        let terrain = Terrain::parse(terrain).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Unknown terrain: {}. Use one of: {}",
                terrain.trim(),
                Terrain::ALL.map(|t| t.as_str()).join(", ")
            ))
        })?;
        let state = self.active_state(battle_id).await?;

        BattleRepository::new(self.db)
            .set_terrain(battle_id, terrain)
            .await?;
        self.log(
            &state,
            None,
            LogType::System,
            format!("The terrain changed to {}!", terrain.as_str()),
        )
        .await?;

        self.state(battle_id).await
    }

    /// Sets how many fainted monsters lose a side the battle. A limit the
    /// battle already reached ends it.
    ///
    /// # Returns
    /// - `Ok(BattleState)` - The battle with the new limit
    /// - `Err(AppError::BadRequest)` - A limit below 1
    /// - `Err(GameError::BattleNotActive)` - The battle has ended
    pub async fn set_win_condition(
        &self,
        battle_id: i32,
        knockout_limit: i32,
    ) -> Result<BattleState, AppError> {
        if knockout_limit < 1 {
            return Err(AppError::BadRequest(
                "Knockout limit must be at least 1".to_string(),
            ));
        }
        let state = self.active_state(battle_id).await?;

        BattleRepository::new(self.db)
            .set_knockout_limit(battle_id, knockout_limit)
            .await?;
        self.log(
            &state,
            None,
            LogType::System,
            format!(
                "Win condition: the first side to lose {} monsters loses",
                knockout_limit
            ),
        )
        .await?;

        let mut messages = Vec::new();
        self.check_outcome(battle_id, &mut messages).await?;

        self.state(battle_id).await
    }
}
