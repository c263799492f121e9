use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        roll::{CatalogueOptionsDto, RollRequestDto, RollResponseDto},
    },
    server::{error::AppError, service::roller::RollerService, state::AppState},
};

/// Tag for grouping roll endpoints in OpenAPI documentation
pub static ROLL_TAG: &str = "roll";

/// Roll random monsters from the species catalogue.
///
/// Rolled monsters are not stored. Sending back the returned seed with the
/// same filters rolls the same monsters again.
///
/// # Returns
/// - `200 OK` - The seed used and the rolled monsters
/// - `400 Bad Request` - `count` outside 1 to 50
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/roll",
    tag = ROLL_TAG,
    request_body = RollRequestDto,
    responses(
        (status = 200, description = "Successfully rolled monsters", body = RollResponseDto),
        (status = 400, description = "Invalid roll count", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn roll(
    State(state): State<AppState>,
    Json(payload): Json<RollRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = RollerService::new(&state.db);

    let result = service
        .roll(payload.params, payload.settings, payload.count, payload.seed)
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// Species, types, attributes, ranks and stages present in the catalogue.
#[utoipa::path(
    get,
    path = "/api/roll/options",
    tag = ROLL_TAG,
    responses(
        (status = 200, description = "Successfully retrieved roll options", body = CatalogueOptionsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn roll_options(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = RollerService::new(&state.db);

    let options = service.options().await?;

    Ok((StatusCode::OK, Json(options.into_dto())))
}
