use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Game rule violations raised by the service layer.
///
/// Each variant maps to its own HTTP status and carries a message that is safe
/// to show to the player.
#[derive(Error, Debug, PartialEq)]
pub enum GameError {
    /// The player has no participant in the battle they are acting on.
    #[error("You are not participating in this battle")]
    NotParticipating,

    /// The battle has already ended.
    #[error("Battle is not active")]
    BattleNotActive,

    /// The trainer's inventory does not hold enough of an item.
    #[error("Missing required item: {item}")]
    MissingItem { item: String },

    /// A monster failed a breeding eligibility check.
    #[error("{name} cannot be used: {reason}")]
    MonsterNotEligible { name: String, reason: String },

    /// A session option or reward was claimed before.
    #[error("This has already been claimed")]
    AlreadyClaimed,

    /// The resource belongs to another player.
    #[error("You do not own this resource")]
    NotOwner,

    /// A battle target could not be resolved.
    #[error("{0}")]
    InvalidTarget(String),

    /// The monster does not know the requested move.
    #[error("{0}")]
    UnknownMove(String),

    /// Any other rule violation.
    #[error("{0}")]
    Rule(String),
}

impl GameError {
    pub fn missing_item(item: impl Into<String>) -> Self {
        Self::MissingItem { item: item.into() }
    }

    pub fn rule(message: impl Into<String>) -> Self {
        Self::Rule(message.into())
    }

    /// Status code returned to the client for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotParticipating | Self::NotOwner => StatusCode::FORBIDDEN,
            Self::BattleNotActive | Self::AlreadyClaimed => StatusCode::CONFLICT,
            Self::MissingItem { .. }
            | Self::MonsterNotEligible { .. }
            | Self::InvalidTarget(_)
            | Self::UnknownMove(_)
            | Self::Rule(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Converts game errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Missing items, ineligible monsters, bad targets or moves, rule failures
/// - 403 Forbidden - `NotParticipating` and `NotOwner`
/// - 409 Conflict - `BattleNotActive` and `AlreadyClaimed`
impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
