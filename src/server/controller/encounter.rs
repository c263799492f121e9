use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        encounter::{CaptureDto, CaptureResultDto, EncounterDto, GenerateEncounterDto},
    },
    server::{
        error::AppError,
        model::encounter::{CaptureParam, EncounterKind},
        service::encounter::EncounterService,
        state::AppState,
    },
};

/// Tag for grouping encounter endpoints in OpenAPI documentation
pub static ENCOUNTER_TAG: &str = "encounter";

/// Generate an encounter at a location.
///
/// Without a forced kind the encounter is a wild group, a battle or an item.
/// Wild groups aggressive enough turn the encounter into a battle.
///
/// # Returns
/// - `201 Created` - The stored encounter
/// - `400 Bad Request` - Unknown encounter kind
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/encounters",
    tag = ENCOUNTER_TAG,
    request_body = GenerateEncounterDto,
    responses(
        (status = 201, description = "Successfully generated encounter", body = EncounterDto),
        (status = 400, description = "Unknown encounter kind", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn generate_encounter(
    State(state): State<AppState>,
    Json(payload): Json<GenerateEncounterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = EncounterService::new(&state.db);

    let kind = payload
        .kind
        .as_deref()
        .map(|k| {
            EncounterKind::parse(k)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown encounter kind: {}", k)))
        })
        .transpose()?;
    let encounter = service
        .generate(kind, payload.location, payload.settings, payload.seed)
        .await?;

    Ok((StatusCode::CREATED, Json(encounter.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/encounters/{encounter_id}",
    tag = ENCOUNTER_TAG,
    params(
        ("encounter_id" = i32, Path, description = "Encounter ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved encounter", body = EncounterDto),
        (status = 404, description = "Encounter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_encounter(
    State(state): State<AppState>,
    Path(encounter_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = EncounterService::new(&state.db);

    let encounter = service.get(encounter_id).await?;

    Ok((StatusCode::OK, Json(encounter.into_dto())))
}

/// Throw a ball at a wild group.
///
/// The ball and any Pokepuffs are used up whether the capture works or not.
///
/// # Returns
/// - `200 OK` - Whether the capture worked, the chance and the new monster
/// - `400 Bad Request` - Unknown ball or group, missing items, or nothing left to capture
/// - `404 Not Found` - Unknown encounter or trainer
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/encounters/{encounter_id}/capture",
    tag = ENCOUNTER_TAG,
    params(
        ("encounter_id" = i32, Path, description = "Encounter ID")
    ),
    request_body = CaptureDto,
    responses(
        (status = 200, description = "Capture attempted", body = CaptureResultDto),
        (status = 400, description = "Capture not possible", body = ErrorDto),
        (status = 404, description = "Encounter or trainer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn capture(
    State(state): State<AppState>,
    Path(encounter_id): Path<i32>,
    Json(payload): Json<CaptureDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = EncounterService::new(&state.db);

    let outcome = service
        .capture(CaptureParam::from_dto(encounter_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}
