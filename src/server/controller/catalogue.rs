use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        catalogue::{
            AbilityDto, CreateAbilityDto, CreateMoveDto, CreateSpeciesDto, MoveDto, SpeciesDto,
            SpeciesQueryDto,
        },
    },
    server::{
        error::AppError,
        model::catalogue::{CreateAbilityParam, CreateMoveParam, CreateSpeciesParam},
        service::catalogue::CatalogueService,
        state::AppState,
    },
};

/// Tag for grouping species, move and ability endpoints in OpenAPI documentation
pub static CATALOGUE_TAG: &str = "catalogue";

/// Add a species to the catalogue.
///
/// # Returns
/// - `201 Created` - The new species
/// - `400 Bad Request` - Unknown franchise, blank name or no types
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/species",
    tag = CATALOGUE_TAG,
    request_body = CreateSpeciesDto,
    responses(
        (status = 201, description = "Successfully created species", body = SpeciesDto),
        (status = 400, description = "Invalid species data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_species(
    State(state): State<AppState>,
    Json(payload): Json<CreateSpeciesDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CatalogueService::new(&state.db);

    let franchise = payload.franchise.clone();
    let param = CreateSpeciesParam::from_dto(payload)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown franchise: {}", franchise)))?;
    let species = service.create_species(param).await?;

    Ok((StatusCode::CREATED, Json(species.into_dto())))
}

/// List species, optionally from one franchise.
#[utoipa::path(
    get,
    path = "/api/species",
    tag = CATALOGUE_TAG,
    params(
        ("franchise" = Option<String>, Query, description = "Only species of this franchise")
    ),
    responses(
        (status = 200, description = "Successfully retrieved species", body = Vec<SpeciesDto>),
        (status = 400, description = "Unknown franchise", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_species(
    State(state): State<AppState>,
    Query(query): Query<SpeciesQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CatalogueService::new(&state.db);

    let species = service.list_species(query.franchise.as_deref()).await?;
    let dtos: Vec<SpeciesDto> = species.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Add a move. The category is normalized to Physical, Special or Status.
///
/// # Returns
/// - `201 Created` - The new move
/// - `400 Bad Request` - Unknown category or a move with that name exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/moves",
    tag = CATALOGUE_TAG,
    request_body = CreateMoveDto,
    responses(
        (status = 201, description = "Successfully created move", body = MoveDto),
        (status = 400, description = "Invalid move data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_move(
    State(state): State<AppState>,
    Json(payload): Json<CreateMoveDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CatalogueService::new(&state.db);

    let monster_move = service.create_move(CreateMoveParam::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(monster_move.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/moves",
    tag = CATALOGUE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved moves", body = Vec<MoveDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_moves(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CatalogueService::new(&state.db);

    let moves = service.list_moves().await?;
    let dtos: Vec<MoveDto> = moves.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a move by name, ignoring case.
#[utoipa::path(
    get,
    path = "/api/moves/{name}",
    tag = CATALOGUE_TAG,
    params(
        ("name" = String, Path, description = "Move name")
    ),
    responses(
        (status = 200, description = "Successfully retrieved move", body = MoveDto),
        (status = 404, description = "Move not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_move(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = CatalogueService::new(&state.db);

    let monster_move = service.get_move(&name).await?;

    Ok((StatusCode::OK, Json(monster_move.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/abilities",
    tag = CATALOGUE_TAG,
    request_body = CreateAbilityDto,
    responses(
        (status = 201, description = "Successfully created ability", body = AbilityDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ability(
    State(state): State<AppState>,
    Json(payload): Json<CreateAbilityDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CatalogueService::new(&state.db);

    let ability = service
        .create_ability(CreateAbilityParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(ability.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/abilities",
    tag = CATALOGUE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved abilities", body = Vec<AbilityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_abilities(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CatalogueService::new(&state.db);

    let abilities = service.list_abilities().await?;
    let dtos: Vec<AbilityDto> = abilities.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
