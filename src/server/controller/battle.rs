use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        battle::{
            ActionResultDto, AttackDto, BattleStateDto, ForceEndDto, JoinBattleDto,
            MonsterActionDto, PlayerActionDto, SetTerrainDto, SetWeatherDto, SetWinConditionDto,
            StartPvpDto, UseItemDto,
        },
    },
    server::{
        error::AppError,
        model::battle::{AttackParam, MonsterActionParam, UseItemParam, Winner},
        service::battle::BattleService,
        state::AppState,
    },
};

/// Tag for grouping battle endpoints in OpenAPI documentation
pub static BATTLE_TAG: &str = "battle";

/// Start a battle from a wild or battle encounter.
///
/// The player's trainer acts first. The first listed monster starts on the
/// field.
///
/// # Returns
/// - `201 Created` - The opening lines and the battle state
/// - `400 Bad Request` - An item encounter or a monster listed twice
/// - `403 Forbidden` - The trainer or a monster belongs to someone else
/// - `404 Not Found` - Unknown encounter, trainer or monster
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/encounters/{encounter_id}/battle",
    tag = BATTLE_TAG,
    params(
        ("encounter_id" = i32, Path, description = "Encounter ID")
    ),
    request_body = JoinBattleDto,
    responses(
        (status = 201, description = "Successfully started battle", body = ActionResultDto),
        (status = 400, description = "Battle not possible", body = ErrorDto),
        (status = 403, description = "Trainer or monster belongs to someone else", body = ErrorDto),
        (status = 404, description = "Encounter, trainer or monster not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start_battle(
    State(state): State<AppState>,
    Path(encounter_id): Path<i32>,
    Json(payload): Json<JoinBattleDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BattleService::new(&state.db);

    let result = service
        .start_battle(
            encounter_id,
            &payload.player_user_id,
            payload.trainer_id,
            &payload.monster_ids,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(result.into_dto())))
}

/// Challenge other players' trainers.
#[utoipa::path(
    post,
    path = "/api/battles/pvp",
    tag = BATTLE_TAG,
    request_body = StartPvpDto,
    responses(
        (status = 201, description = "Successfully started battle", body = ActionResultDto),
        (status = 400, description = "No opponents or the challenger among them", body = ErrorDto),
        (status = 403, description = "Trainer or monster belongs to someone else", body = ErrorDto),
        (status = 404, description = "Trainer or monster not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start_pvp(
    State(state): State<AppState>,
    Json(payload): Json<StartPvpDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BattleService::new(&state.db);

    let result = service
        .start_pvp(
            &payload.player_user_id,
            payload.trainer_id,
            &payload.monster_ids,
            &payload.opponent_trainer_ids,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(result.into_dto())))
}

/// Get the state of a battle: participants, monsters, whose turn it is and
/// the latest log lines.
#[utoipa::path(
    get,
    path = "/api/battles/{battle_id}",
    tag = BATTLE_TAG,
    params(
        ("battle_id" = i32, Path, description = "Battle ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved battle", body = BattleStateDto),
        (status = 404, description = "Battle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_battle(
    State(state): State<AppState>,
    Path(battle_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BattleService::new(&state.db);

    let battle = service.state(battle_id).await?;

    Ok((StatusCode::OK, Json(battle.into_dto())))
}

/// Join a running battle on the players side.
#[utoipa::path(
    post,
    path = "/api/battles/{battle_id}/join",
    tag = BATTLE_TAG,
    params(
        ("battle_id" = i32, Path, description = "Battle ID")
    ),
    request_body = JoinBattleDto,
    responses(
        (status = 200, description = "Successfully joined battle", body = ActionResultDto),
        (status = 400, description = "Already in the battle", body = ErrorDto),
        (status = 409, description = "Battle has ended", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_battle(
    State(state): State<AppState>,
    Path(battle_id): Path<i32>,
    Json(payload): Json<JoinBattleDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BattleService::new(&state.db);

    let result = service
        .join(
            battle_id,
            &payload.player_user_id,
            payload.trainer_id,
            &payload.monster_ids,
        )
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// Attack with one of the player's active monsters.
///
/// Once the attack resolves, NPC and wild participants take their turns until
/// a player is up again or the battle ends.
///
/// # Returns
/// - `200 OK` - Every line of the exchange and the battle state
/// - `400 Bad Request` - Not the player's turn, unknown move or target
/// - `403 Forbidden` - The player is not in the battle
/// - `409 Conflict` - The battle has ended
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/battles/{battle_id}/attack",
    tag = BATTLE_TAG,
    params(
        ("battle_id" = i32, Path, description = "Battle ID")
    ),
    request_body = AttackDto,
    responses(
        (status = 200, description = "Attack resolved", body = ActionResultDto),
        (status = 400, description = "Attack not possible", body = ErrorDto),
        (status = 403, description = "Player not in the battle", body = ErrorDto),
        (status = 409, description = "Battle has ended", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn attack(
    State(state): State<AppState>,
    Path(battle_id): Path<i32>,
    Json(payload): Json<AttackDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BattleService::new(&state.db);

    let result = service
        .attack(battle_id, AttackParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// Use a healing item on an own monster, or a ball on a wild one.
///
/// # Returns
/// - `200 OK` - The item's effect, a caught monster if any, and the battle state
/// - `400 Bad Request` - Missing item, unknown target or a ball outside a wild battle
/// - `403 Forbidden` - The player is not in the battle
/// - `409 Conflict` - The battle has ended
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/battles/{battle_id}/item",
    tag = BATTLE_TAG,
    params(
        ("battle_id" = i32, Path, description = "Battle ID")
    ),
    request_body = UseItemDto,
    responses(
        (status = 200, description = "Item used", body = ActionResultDto),
        (status = 400, description = "Item not usable", body = ErrorDto),
        (status = 403, description = "Player not in the battle", body = ErrorDto),
        (status = 409, description = "Battle has ended", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn use_item(
    State(state): State<AppState>,
    Path(battle_id): Path<i32>,
    Json(payload): Json<UseItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BattleService::new(&state.db);

    let result = service
        .use_item(battle_id, UseItemParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// Send a monster onto the field. Does not use up the turn.
#[utoipa::path(
    post,
    path = "/api/battles/{battle_id}/release",
    tag = BATTLE_TAG,
    params(
        ("battle_id" = i32, Path, description = "Battle ID")
    ),
    request_body = MonsterActionDto,
    responses(
        (status = 200, description = "Monster released", body = ActionResultDto),
        (status = 400, description = "Monster already on the field or fainted", body = ErrorDto),
        (status = 403, description = "Player not in the battle", body = ErrorDto),
        (status = 404, description = "Monster not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn release(
    State(state): State<AppState>,
    Path(battle_id): Path<i32>,
    Json(payload): Json<MonsterActionDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BattleService::new(&state.db);

    let result = service
        .release(battle_id, MonsterActionParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// Take a monster off the field. Does not use up the turn.
#[utoipa::path(
    post,
    path = "/api/battles/{battle_id}/withdraw",
    tag = BATTLE_TAG,
    params(
        ("battle_id" = i32, Path, description = "Battle ID")
    ),
    request_body = MonsterActionDto,
    responses(
        (status = 200, description = "Monster withdrawn", body = ActionResultDto),
        (status = 400, description = "Monster not on the field or the last one fighting", body = ErrorDto),
        (status = 403, description = "Player not in the battle", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn withdraw(
    State(state): State<AppState>,
    Path(battle_id): Path<i32>,
    Json(payload): Json<MonsterActionDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BattleService::new(&state.db);

    let result = service
        .withdraw(battle_id, MonsterActionParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// Give up. The other side wins.
#[utoipa::path(
    post,
    path = "/api/battles/{battle_id}/forfeit",
    tag = BATTLE_TAG,
    params(
        ("battle_id" = i32, Path, description = "Battle ID")
    ),
    request_body = PlayerActionDto,
    responses(
        (status = 200, description = "Battle forfeited", body = ActionResultDto),
        (status = 403, description = "Player not in the battle", body = ErrorDto),
        (status = 409, description = "Battle has ended", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn forfeit(
    State(state): State<AppState>,
    Path(battle_id): Path<i32>,
    Json(payload): Json<PlayerActionDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BattleService::new(&state.db);

    let result = service
        .forfeit(battle_id, &payload.player_user_id)
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// Run from a wild battle.
#[utoipa::path(
    post,
    path = "/api/battles/{battle_id}/flee",
    tag = BATTLE_TAG,
    params(
        ("battle_id" = i32, Path, description = "Battle ID")
    ),
    request_body = PlayerActionDto,
    responses(
        (status = 200, description = "Fled from battle", body = ActionResultDto),
        (status = 400, description = "Not a wild battle", body = ErrorDto),
        (status = 403, description = "Player not in the battle", body = ErrorDto),
        (status = 409, description = "Battle has ended", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn flee(
    State(state): State<AppState>,
    Path(battle_id): Path<i32>,
    Json(payload): Json<PlayerActionDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BattleService::new(&state.db);

    let result = service.flee(battle_id, &payload.player_user_id).await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// End a battle with a chosen winner.
///
/// # Returns
/// - `200 OK` - The closing lines, rewards and the final state
/// - `400 Bad Request` - Winner is not `players`, `opponents` or `draw`
/// - `409 Conflict` - The battle has ended
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/battles/{battle_id}/end",
    tag = BATTLE_TAG,
    params(
        ("battle_id" = i32, Path, description = "Battle ID")
    ),
    request_body = ForceEndDto,
    responses(
        (status = 200, description = "Battle ended", body = ActionResultDto),
        (status = 400, description = "Unknown winner", body = ErrorDto),
        (status = 409, description = "Battle has ended", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn force_end(
    State(state): State<AppState>,
    Path(battle_id): Path<i32>,
    Json(payload): Json<ForceEndDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BattleService::new(&state.db);

    let winner = Winner::parse(&payload.winner)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown winner: {}", payload.winner)))?;
    let result = service
        .force_end(battle_id, winner, payload.message)
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/battles/{battle_id}/weather",
    tag = BATTLE_TAG,
    params(
        ("battle_id" = i32, Path, description = "Battle ID")
    ),
    request_body = SetWeatherDto,
    responses(
        (status = 200, description = "Weather changed", body = BattleStateDto),
        (status = 400, description = "Unknown weather", body = ErrorDto),
        (status = 409, description = "Battle has ended", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_weather(
    State(state): State<AppState>,
    Path(battle_id): Path<i32>,
    Json(payload): Json<SetWeatherDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BattleService::new(&state.db);

    let battle = service.set_weather(battle_id, &payload.weather).await?;

    Ok((StatusCode::OK, Json(battle.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/battles/{battle_id}/terrain",
    tag = BATTLE_TAG,
    params(
        ("battle_id" = i32, Path, description = "Battle ID")
    ),
    request_body = SetTerrainDto,
    responses(
        (status = 200, description = "Terrain changed", body = BattleStateDto),
        (status = 400, description = "Unknown terrain", body = ErrorDto),
        (status = 409, description = "Battle has ended", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_terrain(
    State(state): State<AppState>,
    Path(battle_id): Path<i32>,
    Json(payload): Json<SetTerrainDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BattleService::new(&state.db);

    let battle = service.set_terrain(battle_id, &payload.terrain).await?;

    Ok((StatusCode::OK, Json(battle.into_dto())))
}

/// Set how many fainted monsters lose a side the battle.
#[utoipa::path(
    put,
    path = "/api/admin/battles/{battle_id}/win-condition",
    tag = BATTLE_TAG,
    params(
        ("battle_id" = i32, Path, description = "Battle ID")
    ),
    request_body = SetWinConditionDto,
    responses(
        (status = 200, description = "Win condition changed", body = BattleStateDto),
        (status = 400, description = "Knockout limit below 1", body = ErrorDto),
        (status = 409, description = "Battle has ended", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_win_condition(
    State(state): State<AppState>,
    Path(battle_id): Path<i32>,
    Json(payload): Json<SetWinConditionDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BattleService::new(&state.db);

    let battle = service
        .set_win_condition(battle_id, payload.knockout_limit)
        .await?;

    Ok((StatusCode::OK, Json(battle.into_dto())))
}
