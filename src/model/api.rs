use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Acknowledgement returned by endpoints that have nothing else to report.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Identifies the calling player in query strings.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct PlayerQueryDto {
    pub player_user_id: String,
}
