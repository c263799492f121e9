use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        breeding::{
            BreedDto, BreedingSessionDto, ClaimOffspringDto, EligibilityDto, OffspringClaimDto,
        },
        nursery::SessionOwnerDto,
    },
    server::{
        error::AppError,
        model::breeding::{eligibility_dto, BreedParam},
        service::breeding::BreedingService,
        state::AppState,
    },
};

/// Tag for grouping breeding endpoints in OpenAPI documentation
pub static BREEDING_TAG: &str = "breeding";

/// Check whether a monster can breed.
///
/// Monsters of a species that still evolves, or of a legendary or mythical
/// species, are not eligible. Species missing from the catalogue are.
#[utoipa::path(
    get,
    path = "/api/breeding/eligibility/{monster_id}",
    tag = BREEDING_TAG,
    params(
        ("monster_id" = i32, Path, description = "Monster ID")
    ),
    responses(
        (status = 200, description = "Successfully checked eligibility", body = EligibilityDto),
        (status = 404, description = "Monster not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_eligibility(
    State(state): State<AppState>,
    Path(monster_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BreedingService::new(&state.db);

    let eligibility = service.check_eligibility(monster_id).await?;

    Ok((StatusCode::OK, Json(eligibility_dto(monster_id, eligibility))))
}

/// Breed two monsters.
///
/// Consumes a Legacy Leeway and the chosen extra items, then stores a
/// breeding session holding the possible offspring.
///
/// # Returns
/// - `201 Created` - The breeding session
/// - `400 Bad Request` - Ineligible parents, missing items or too many extra items
/// - `403 Forbidden` - The trainer or the first parent belongs to someone else
/// - `404 Not Found` - Unknown trainer or parent
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/breeding",
    tag = BREEDING_TAG,
    request_body = BreedDto,
    responses(
        (status = 201, description = "Successfully bred monsters", body = BreedingSessionDto),
        (status = 400, description = "Breeding not possible", body = ErrorDto),
        (status = 403, description = "Trainer or parent belongs to someone else", body = ErrorDto),
        (status = 404, description = "Trainer or parent not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn breed(
    State(state): State<AppState>,
    Json(payload): Json<BreedDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BreedingService::new(&state.db);

    let session = service.breed(BreedParam::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(session.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/breeding/sessions/{session_id}",
    tag = BREEDING_TAG,
    params(
        ("session_id" = i32, Path, description = "Breeding session ID"),
        ("player_user_id" = String, Query, description = "Player who owns the session")
    ),
    responses(
        (status = 200, description = "Successfully retrieved session", body = BreedingSessionDto),
        (status = 403, description = "Session belongs to another player", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_breeding_session(
    State(state): State<AppState>,
    Path(session_id): Path<i32>,
    Query(owner): Query<SessionOwnerDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BreedingService::new(&state.db);

    let session = service
        .get_session(session_id, &owner.player_user_id)
        .await?;

    Ok((StatusCode::OK, Json(session.into_dto())))
}

/// Claim one of the offspring as a new level 1 monster.
///
/// # Returns
/// - `201 Created` - The new monster and the updated session
/// - `400 Bad Request` - No offspring at that index
/// - `403 Forbidden` - The session belongs to another player
/// - `409 Conflict` - The offspring was claimed before
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/breeding/sessions/{session_id}/claim",
    tag = BREEDING_TAG,
    params(
        ("session_id" = i32, Path, description = "Breeding session ID")
    ),
    request_body = ClaimOffspringDto,
    responses(
        (status = 201, description = "Successfully claimed offspring", body = OffspringClaimDto),
        (status = 400, description = "Invalid offspring index", body = ErrorDto),
        (status = 403, description = "Session belongs to another player", body = ErrorDto),
        (status = 409, description = "Offspring already claimed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn claim_offspring(
    State(state): State<AppState>,
    Path(session_id): Path<i32>,
    Json(payload): Json<ClaimOffspringDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BreedingService::new(&state.db);

    let claim = service
        .claim(session_id, &payload.player_user_id, payload.index, payload.name)
        .await?;

    Ok((StatusCode::CREATED, Json(claim.into_dto())))
}

/// Reroll the offspring of a session with a Forget-Me-Not. Claims are reset.
#[utoipa::path(
    post,
    path = "/api/breeding/sessions/{session_id}/reroll",
    tag = BREEDING_TAG,
    params(
        ("session_id" = i32, Path, description = "Breeding session ID")
    ),
    request_body = SessionOwnerDto,
    responses(
        (status = 200, description = "Successfully rerolled offspring", body = BreedingSessionDto),
        (status = 400, description = "No Forget-Me-Not", body = ErrorDto),
        (status = 403, description = "Session belongs to another player", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reroll_offspring(
    State(state): State<AppState>,
    Path(session_id): Path<i32>,
    Json(payload): Json<SessionOwnerDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BreedingService::new(&state.db);

    let session = service
        .reroll(session_id, &payload.player_user_id)
        .await?;

    Ok((StatusCode::OK, Json(session.into_dto())))
}
