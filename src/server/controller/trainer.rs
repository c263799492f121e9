use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, PlayerQueryDto},
        monster::MonsterDto,
        trainer::{
            AddCoinsDto, CreateTrainerDto, HasItemDto, InventoryChangeDto, InventoryItemDto,
            TrainerDto,
        },
    },
    server::{
        error::AppError,
        model::trainer::{CreateTrainerParam, InventoryChange},
        service::{monster::MonsterService, trainer::TrainerService},
        state::AppState,
    },
};

/// Tag for grouping trainer endpoints in OpenAPI documentation
pub static TRAINER_TAG: &str = "trainer";

#[derive(Deserialize)]
pub struct ItemQuery {
    pub category: String,
    pub item_name: String,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}

/// Create a trainer for a player.
///
/// # Returns
/// - `201 Created` - The new trainer
/// - `400 Bad Request` - Blank name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/trainers",
    tag = TRAINER_TAG,
    request_body = CreateTrainerDto,
    responses(
        (status = 201, description = "Successfully created trainer", body = TrainerDto),
        (status = 400, description = "Invalid trainer data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_trainer(
    State(state): State<AppState>,
    Json(payload): Json<CreateTrainerDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = TrainerService::new(&state.db);

    let trainer = service.create(CreateTrainerParam::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(trainer.into_dto())))
}

/// List the trainers of a player.
#[utoipa::path(
    get,
    path = "/api/trainers",
    tag = TRAINER_TAG,
    params(
        ("player_user_id" = String, Query, description = "Player whose trainers to list")
    ),
    responses(
        (status = 200, description = "Successfully retrieved trainers", body = Vec<TrainerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_trainers(
    State(state): State<AppState>,
    Query(query): Query<PlayerQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = TrainerService::new(&state.db);

    let trainers = service.list_by_player(&query.player_user_id).await?;
    let dtos: Vec<TrainerDto> = trainers.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a trainer by ID.
///
/// # Returns
/// - `200 OK` - The trainer
/// - `404 Not Found` - No trainer with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/trainers/{trainer_id}",
    tag = TRAINER_TAG,
    params(
        ("trainer_id" = i32, Path, description = "Trainer ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved trainer", body = TrainerDto),
        (status = 404, description = "Trainer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trainer(
    State(state): State<AppState>,
    Path(trainer_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = TrainerService::new(&state.db);

    let trainer = service.get(trainer_id).await?;

    Ok((StatusCode::OK, Json(trainer.into_dto())))
}

/// Delete a trainer along with its monsters and inventory.
#[utoipa::path(
    delete,
    path = "/api/trainers/{trainer_id}",
    tag = TRAINER_TAG,
    params(
        ("trainer_id" = i32, Path, description = "Trainer ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted trainer"),
        (status = 404, description = "Trainer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_trainer(
    State(state): State<AppState>,
    Path(trainer_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = TrainerService::new(&state.db);

    service.delete(trainer_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add coins to a trainer, or spend them with a negative amount.
///
/// # Returns
/// - `200 OK` - The trainer with its new balance
/// - `400 Bad Request` - Spending more coins than the trainer has
/// - `404 Not Found` - No trainer with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/trainers/{trainer_id}/coins",
    tag = TRAINER_TAG,
    params(
        ("trainer_id" = i32, Path, description = "Trainer ID")
    ),
    request_body = AddCoinsDto,
    responses(
        (status = 200, description = "Successfully updated coins", body = TrainerDto),
        (status = 400, description = "Not enough coins", body = ErrorDto),
        (status = 404, description = "Trainer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_coins(
    State(state): State<AppState>,
    Path(trainer_id): Path<i32>,
    Json(payload): Json<AddCoinsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = TrainerService::new(&state.db);

    let trainer = service.add_coins(trainer_id, payload.amount).await?;

    Ok((StatusCode::OK, Json(trainer.into_dto())))
}

/// List the monsters a trainer owns.
#[utoipa::path(
    get,
    path = "/api/trainers/{trainer_id}/monsters",
    tag = TRAINER_TAG,
    params(
        ("trainer_id" = i32, Path, description = "Trainer ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved monsters", body = Vec<MonsterDto>),
        (status = 404, description = "Trainer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_trainer_monsters(
    State(state): State<AppState>,
    Path(trainer_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = MonsterService::new(&state.db);

    let monsters = service.list_by_trainer(trainer_id).await?;
    let dtos: Vec<MonsterDto> = monsters.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a trainer's inventory across every category.
#[utoipa::path(
    get,
    path = "/api/trainers/{trainer_id}/inventory",
    tag = TRAINER_TAG,
    params(
        ("trainer_id" = i32, Path, description = "Trainer ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved inventory", body = Vec<InventoryItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inventory(
    State(state): State<AppState>,
    Path(trainer_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = TrainerService::new(&state.db);

    let items = service.inventory(trainer_id).await?;
    let dtos: Vec<InventoryItemDto> = items.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Add items to a trainer's inventory.
///
/// # Returns
/// - `200 OK` - The updated inventory stack
/// - `400 Bad Request` - Unknown category or a quantity below 1
/// - `404 Not Found` - No trainer with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/trainers/{trainer_id}/inventory",
    tag = TRAINER_TAG,
    params(
        ("trainer_id" = i32, Path, description = "Trainer ID")
    ),
    request_body = InventoryChangeDto,
    responses(
        (status = 200, description = "Successfully added items", body = InventoryItemDto),
        (status = 400, description = "Invalid inventory change", body = ErrorDto),
        (status = 404, description = "Trainer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_item(
    State(state): State<AppState>,
    Path(trainer_id): Path<i32>,
    Json(payload): Json<InventoryChangeDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = TrainerService::new(&state.db);

    let item = service
        .add_item(InventoryChange::from_dto(trainer_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Remove items from a trainer's inventory.
///
/// # Returns
/// - `204 No Content` - The items were removed
/// - `400 Bad Request` - The trainer holds fewer items than requested
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/trainers/{trainer_id}/inventory",
    tag = TRAINER_TAG,
    params(
        ("trainer_id" = i32, Path, description = "Trainer ID")
    ),
    request_body = InventoryChangeDto,
    responses(
        (status = 204, description = "Successfully removed items"),
        (status = 400, description = "Missing items", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_item(
    State(state): State<AppState>,
    Path(trainer_id): Path<i32>,
    Json(payload): Json<InventoryChangeDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = TrainerService::new(&state.db);

    service
        .remove_item(InventoryChange::from_dto(trainer_id, payload))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Check whether a trainer holds enough of an item.
#[utoipa::path(
    get,
    path = "/api/trainers/{trainer_id}/inventory/check",
    tag = TRAINER_TAG,
    params(
        ("trainer_id" = i32, Path, description = "Trainer ID"),
        ("category" = String, Query, description = "Inventory category"),
        ("item_name" = String, Query, description = "Item name"),
        ("quantity" = Option<i32>, Query, description = "Quantity needed (default: 1)")
    ),
    responses(
        (status = 200, description = "Successfully checked inventory", body = HasItemDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn has_item(
    State(state): State<AppState>,
    Path(trainer_id): Path<i32>,
    Query(query): Query<ItemQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = TrainerService::new(&state.db);

    let has_item = service
        .has_item(trainer_id, &query.category, &query.item_name, query.quantity)
        .await?;

    Ok((
        StatusCode::OK,
        Json(HasItemDto {
            category: query.category,
            item_name: query.item_name,
            quantity: query.quantity,
            has_item,
        }),
    ))
}
