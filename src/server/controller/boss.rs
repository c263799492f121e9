use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::{ErrorDto, PlayerQueryDto},
        boss::{
            AddBossDamageDto, BossDamageResultDto, BossDto, BossQueryDto, BossRewardClaimDto,
            BossRewardResultDto, BossStatsDto, ClaimBossRewardDto, CreateBossDto,
            LeaderboardEntryDto,
        },
    },
    server::{
        error::AppError, model::boss::CreateBossParam, service::boss::BossService,
        state::AppState,
    },
};

/// Tag for grouping boss endpoints in OpenAPI documentation
pub static BOSS_TAG: &str = "boss";

/// Create a monthly boss at full HP.
///
/// # Returns
/// - `201 Created` - The new boss
/// - `400 Bad Request` - Blank name or HP below 1
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/bosses",
    tag = BOSS_TAG,
    request_body = CreateBossDto,
    responses(
        (status = 201, description = "Successfully created boss", body = BossDto),
        (status = 400, description = "Invalid boss data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_boss(
    State(state): State<AppState>,
    Json(payload): Json<CreateBossDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BossService::new(&state.db);

    let boss = service
        .create(CreateBossParam::from_dto(payload, Utc::now()))
        .await?;

    Ok((StatusCode::CREATED, Json(boss.into_dto())))
}

/// Get the boss currently being fought.
#[utoipa::path(
    get,
    path = "/api/bosses/active",
    tag = BOSS_TAG,
    responses(
        (status = 200, description = "Successfully retrieved active boss", body = BossDto),
        (status = 404, description = "No active boss", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_active_boss(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = BossService::new(&state.db);

    let boss = service.active().await?;

    Ok((StatusCode::OK, Json(boss.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/bosses/defeated",
    tag = BOSS_TAG,
    responses(
        (status = 200, description = "Successfully retrieved defeated bosses", body = Vec<BossDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_defeated_bosses(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = BossService::new(&state.db);

    let bosses = service.defeated().await?;
    let dtos: Vec<BossDto> = bosses.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a boss with its damage totals and leaderboard.
///
/// With a `player_user_id` the player's own damage is included.
#[utoipa::path(
    get,
    path = "/api/bosses/{boss_id}",
    tag = BOSS_TAG,
    params(
        ("boss_id" = i32, Path, description = "Boss ID"),
        ("player_user_id" = Option<String>, Query, description = "Player whose damage to include"),
        ("limit" = Option<u64>, Query, description = "Maximum leaderboard entries")
    ),
    responses(
        (status = 200, description = "Successfully retrieved boss", body = BossStatsDto),
        (status = 404, description = "Boss not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_boss(
    State(state): State<AppState>,
    Path(boss_id): Path<i32>,
    Query(query): Query<BossQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BossService::new(&state.db);

    let stats = service
        .stats(boss_id, query.player_user_id.as_deref(), query.limit)
        .await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/bosses/{boss_id}/leaderboard",
    tag = BOSS_TAG,
    params(
        ("boss_id" = i32, Path, description = "Boss ID"),
        ("limit" = Option<u64>, Query, description = "Maximum entries")
    ),
    responses(
        (status = 200, description = "Successfully retrieved leaderboard", body = Vec<LeaderboardEntryDto>),
        (status = 404, description = "Boss not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Path(boss_id): Path<i32>,
    Query(query): Query<BossQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BossService::new(&state.db);

    let leaderboard = service.leaderboard(boss_id, query.limit).await?;
    let dtos: Vec<LeaderboardEntryDto> = leaderboard.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Deal damage to the active boss.
///
/// The hit that brings the boss to 0 HP defeats it and hands out rewards to
/// everyone who damaged it.
///
/// # Returns
/// - `200 OK` - The boss after the hit and whether it was defeated
/// - `400 Bad Request` - Damage below 1
/// - `404 Not Found` - No active boss
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/bosses/active/damage",
    tag = BOSS_TAG,
    request_body = AddBossDamageDto,
    responses(
        (status = 200, description = "Damage dealt", body = BossDamageResultDto),
        (status = 400, description = "Invalid damage", body = ErrorDto),
        (status = 404, description = "No active boss", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_damage(
    State(state): State<AppState>,
    Json(payload): Json<AddBossDamageDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BossService::new(&state.db);

    let result = service
        .add_damage(&payload.player_user_id, payload.amount, payload.submission_id)
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// List a player's boss rewards that are waiting to be claimed.
#[utoipa::path(
    get,
    path = "/api/bosses/rewards",
    tag = BOSS_TAG,
    params(
        ("player_user_id" = String, Query, description = "Player whose rewards to list")
    ),
    responses(
        (status = 200, description = "Successfully retrieved rewards", body = Vec<BossRewardClaimDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_unclaimed_rewards(
    State(state): State<AppState>,
    Query(query): Query<PlayerQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BossService::new(&state.db);

    let claims = service.unclaimed_rewards(&query.player_user_id).await?;
    let dtos: Vec<BossRewardClaimDto> = claims.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Claim a boss reward as a new monster for one of the player's trainers.
///
/// # Returns
/// - `201 Created` - The claim and the new monster
/// - `400 Bad Request` - Blank monster name
/// - `403 Forbidden` - The trainer belongs to another player
/// - `404 Not Found` - The player has no reward for this boss
/// - `409 Conflict` - The reward was claimed before
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/bosses/{boss_id}/rewards/claim",
    tag = BOSS_TAG,
    params(
        ("boss_id" = i32, Path, description = "Boss ID")
    ),
    request_body = ClaimBossRewardDto,
    responses(
        (status = 201, description = "Successfully claimed reward", body = BossRewardResultDto),
        (status = 400, description = "Invalid monster name", body = ErrorDto),
        (status = 403, description = "Trainer belongs to another player", body = ErrorDto),
        (status = 404, description = "No reward for this boss", body = ErrorDto),
        (status = 409, description = "Reward already claimed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn claim_reward(
    State(state): State<AppState>,
    Path(boss_id): Path<i32>,
    Json(payload): Json<ClaimBossRewardDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BossService::new(&state.db);

    let result = service
        .claim_reward(
            boss_id,
            &payload.player_user_id,
            &payload.monster_name,
            payload.trainer_id,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(result.into_dto())))
}
