use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        nursery::{HatchSelectionDto, HatchSessionDto, SelectHatchDto, SessionOwnerDto, StartHatchDto},
    },
    server::{
        error::AppError,
        model::nursery::{SelectHatchParam, StartHatchParam},
        service::nursery::NurseryService,
        state::AppState,
    },
};

/// Tag for grouping nursery endpoints in OpenAPI documentation
pub static NURSERY_TAG: &str = "nursery";

/// Hatch a batch of eggs.
///
/// Consumes the eggs, one incubator per egg unless an image is supplied, and
/// the selected items. Each egg rolls several monsters to choose from.
///
/// # Returns
/// - `201 Created` - The hatch session with every egg's options
/// - `400 Bad Request` - Missing eggs, incubators or items, or a bad egg count
/// - `403 Forbidden` - The trainer belongs to another player
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/nursery/hatch",
    tag = NURSERY_TAG,
    request_body = StartHatchDto,
    responses(
        (status = 201, description = "Successfully hatched eggs", body = HatchSessionDto),
        (status = 400, description = "Hatching not possible", body = ErrorDto),
        (status = 403, description = "Trainer belongs to another player", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start_hatch(
    State(state): State<AppState>,
    Json(payload): Json<StartHatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = NurseryService::new(&state.db);

    let session = service
        .start_hatch(StartHatchParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(session.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/nursery/sessions/{session_id}",
    tag = NURSERY_TAG,
    params(
        ("session_id" = i32, Path, description = "Hatch session ID"),
        ("player_user_id" = String, Query, description = "Player who owns the session")
    ),
    responses(
        (status = 200, description = "Successfully retrieved session", body = HatchSessionDto),
        (status = 403, description = "Session belongs to another player", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hatch_session(
    State(state): State<AppState>,
    Path(session_id): Path<i32>,
    Query(owner): Query<SessionOwnerDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = NurseryService::new(&state.db);

    let session = service
        .get_session(session_id, &owner.player_user_id)
        .await?;

    Ok((StatusCode::OK, Json(session.into_dto())))
}

/// Pick a hatched monster from an egg.
///
/// One pick per egg; a second pick from the same egg uses an Edenwiess.
///
/// # Returns
/// - `201 Created` - The new monster and the updated session
/// - `400 Bad Request` - Unknown egg or option, or no Edenwiess for a second pick
/// - `403 Forbidden` - The session belongs to another player
/// - `409 Conflict` - The option was picked before
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/nursery/sessions/{session_id}/select",
    tag = NURSERY_TAG,
    params(
        ("session_id" = i32, Path, description = "Hatch session ID")
    ),
    request_body = SelectHatchDto,
    responses(
        (status = 201, description = "Successfully selected monster", body = HatchSelectionDto),
        (status = 400, description = "Selection not possible", body = ErrorDto),
        (status = 403, description = "Session belongs to another player", body = ErrorDto),
        (status = 409, description = "Option already selected", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn select_hatched(
    State(state): State<AppState>,
    Path(session_id): Path<i32>,
    Json(payload): Json<SelectHatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = NurseryService::new(&state.db);

    let selection = service
        .select(session_id, SelectHatchParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(selection.into_dto())))
}

/// Hatch the same eggs again with a Forget-Me-Not. Picks are reset.
#[utoipa::path(
    post,
    path = "/api/nursery/sessions/{session_id}/reroll",
    tag = NURSERY_TAG,
    params(
        ("session_id" = i32, Path, description = "Hatch session ID")
    ),
    request_body = SessionOwnerDto,
    responses(
        (status = 200, description = "Successfully rerolled eggs", body = HatchSessionDto),
        (status = 400, description = "No Forget-Me-Not", body = ErrorDto),
        (status = 403, description = "Session belongs to another player", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reroll_hatch(
    State(state): State<AppState>,
    Path(session_id): Path<i32>,
    Json(payload): Json<SessionOwnerDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = NurseryService::new(&state.db);

    let session = service
        .reroll(session_id, &payload.player_user_id)
        .await?;

    Ok((StatusCode::OK, Json(session.into_dto())))
}
