use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        monster::{
            AddLevelsDto, AddParentsDto, CreateMonsterDto, LevelUpDto, LineageDto, MonsterDto,
            RenameMonsterDto,
        },
    },
    server::{
        error::AppError, model::monster::CreateMonsterParam, service::monster::MonsterService,
        state::AppState,
    },
};

/// Tag for grouping monster endpoints in OpenAPI documentation
pub static MONSTER_TAG: &str = "monster";

/// Create a monster for a trainer.
///
/// Stats, nature, abilities and moves are rolled from the species, types and
/// level in the request.
///
/// # Returns
/// - `201 Created` - The new monster
/// - `400 Bad Request` - Missing species or types
/// - `403 Forbidden` - The trainer belongs to another player
/// - `404 Not Found` - No trainer with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/monsters",
    tag = MONSTER_TAG,
    request_body = CreateMonsterDto,
    responses(
        (status = 201, description = "Successfully created monster", body = MonsterDto),
        (status = 400, description = "Invalid monster data", body = ErrorDto),
        (status = 403, description = "Trainer belongs to another player", body = ErrorDto),
        (status = 404, description = "Trainer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_monster(
    State(state): State<AppState>,
    Json(payload): Json<CreateMonsterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MonsterService::new(&state.db);

    let monster = service.create(CreateMonsterParam::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(monster.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/monsters/{monster_id}",
    tag = MONSTER_TAG,
    params(
        ("monster_id" = i32, Path, description = "Monster ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved monster", body = MonsterDto),
        (status = 404, description = "Monster not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_monster(
    State(state): State<AppState>,
    Path(monster_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MonsterService::new(&state.db);

    let monster = service.get(monster_id).await?;

    Ok((StatusCode::OK, Json(monster.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/monsters/{monster_id}",
    tag = MONSTER_TAG,
    params(
        ("monster_id" = i32, Path, description = "Monster ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted monster"),
        (status = 404, description = "Monster not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_monster(
    State(state): State<AppState>,
    Path(monster_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MonsterService::new(&state.db);

    service.delete(monster_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/api/monsters/{monster_id}/name",
    tag = MONSTER_TAG,
    params(
        ("monster_id" = i32, Path, description = "Monster ID")
    ),
    request_body = RenameMonsterDto,
    responses(
        (status = 200, description = "Successfully renamed monster", body = MonsterDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 404, description = "Monster not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn rename_monster(
    State(state): State<AppState>,
    Path(monster_id): Path<i32>,
    Json(payload): Json<RenameMonsterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MonsterService::new(&state.db);

    let monster = service.rename(monster_id, payload.name).await?;

    Ok((StatusCode::OK, Json(monster.into_dto())))
}

/// Level a monster up.
///
/// Stats are recalculated and moves learned along the way are added to the
/// moveset. Levels beyond the level cap are dropped.
///
/// # Returns
/// - `200 OK` - Old and new level, learned moves and the level-up messages
/// - `400 Bad Request` - Fewer than one level
/// - `404 Not Found` - No monster with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/monsters/{monster_id}/levels",
    tag = MONSTER_TAG,
    params(
        ("monster_id" = i32, Path, description = "Monster ID")
    ),
    request_body = AddLevelsDto,
    responses(
        (status = 200, description = "Successfully leveled up monster", body = LevelUpDto),
        (status = 400, description = "Invalid level count", body = ErrorDto),
        (status = 404, description = "Monster not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_levels(
    State(state): State<AppState>,
    Path(monster_id): Path<i32>,
    Json(payload): Json<AddLevelsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MonsterService::new(&state.db);

    let result = service.add_levels(monster_id, payload.levels).await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// Get a monster's parents and children.
#[utoipa::path(
    get,
    path = "/api/monsters/{monster_id}/lineage",
    tag = MONSTER_TAG,
    params(
        ("monster_id" = i32, Path, description = "Monster ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved lineage", body = LineageDto),
        (status = 404, description = "Monster not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lineage(
    State(state): State<AppState>,
    Path(monster_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MonsterService::new(&state.db);

    let lineage = service.lineage(monster_id).await?;

    Ok((StatusCode::OK, Json(lineage.into_dto())))
}

/// Record parents of a monster.
#[utoipa::path(
    post,
    path = "/api/monsters/{monster_id}/lineage",
    tag = MONSTER_TAG,
    params(
        ("monster_id" = i32, Path, description = "Monster ID")
    ),
    request_body = AddParentsDto,
    responses(
        (status = 200, description = "Successfully recorded parents", body = LineageDto),
        (status = 404, description = "Monster or parent not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_parents(
    State(state): State<AppState>,
    Path(monster_id): Path<i32>,
    Json(payload): Json<AddParentsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MonsterService::new(&state.db);

    let lineage = service.add_parents(monster_id, &payload.parent_ids).await?;

    Ok((StatusCode::OK, Json(lineage.into_dto())))
}
