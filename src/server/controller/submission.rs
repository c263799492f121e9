use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PlayerQueryDto},
        submission::{
            AppliedRewardsDto, ApplySubmissionDto, ArtSubmissionDto, ExternalArtSubmissionDto,
            ExternalWritingSubmissionDto, SubmissionDto, SubmissionRewardsDto,
            WritingSubmissionDto,
        },
    },
    server::{
        error::AppError,
        model::submission::{
            ArtSubmission, ExternalArtSubmission, SubmissionInput, WritingSubmission,
        },
        service::submission::SubmissionService,
        state::AppState,
    },
};

/// Tag for grouping submission endpoints in OpenAPI documentation
pub static SUBMISSION_TAG: &str = "submission";

/// Calculate the rewards for an art submission.
///
/// Nothing is applied; send the result to the apply endpoint to hand the
/// rewards out. Characters owned by other players count as gifts.
///
/// # Returns
/// - `200 OK` - Levels and coins per character plus bonus rolls
/// - `400 Bad Request` - Unknown quality
/// - `404 Not Found` - Unknown trainer or monster
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/submissions/art/rewards",
    tag = SUBMISSION_TAG,
    params(
        ("player_user_id" = String, Query, description = "Submitting player")
    ),
    request_body = ArtSubmissionDto,
    responses(
        (status = 200, description = "Successfully calculated rewards", body = SubmissionRewardsDto),
        (status = 400, description = "Invalid submission", body = ErrorDto),
        (status = 404, description = "Trainer or monster not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn art_rewards(
    State(state): State<AppState>,
    Query(query): Query<PlayerQueryDto>,
    Json(payload): Json<ArtSubmissionDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SubmissionService::new(&state.db);

    let rewards = service
        .art_rewards(&query.player_user_id, ArtSubmission::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(rewards.into_dto())))
}

/// Calculate the rewards for a writing submission. The word count is split
/// between every participant.
#[utoipa::path(
    post,
    path = "/api/submissions/writing/rewards",
    tag = SUBMISSION_TAG,
    params(
        ("player_user_id" = String, Query, description = "Submitting player")
    ),
    request_body = WritingSubmissionDto,
    responses(
        (status = 200, description = "Successfully calculated rewards", body = SubmissionRewardsDto),
        (status = 400, description = "No participants", body = ErrorDto),
        (status = 404, description = "Trainer or monster not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn writing_rewards(
    State(state): State<AppState>,
    Query(query): Query<PlayerQueryDto>,
    Json(payload): Json<WritingSubmissionDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SubmissionService::new(&state.db);

    let rewards = service
        .writing_rewards(&query.player_user_id, WritingSubmission::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(rewards.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/submissions/external/art/rewards",
    tag = SUBMISSION_TAG,
    request_body = ExternalArtSubmissionDto,
    responses(
        (status = 200, description = "Successfully calculated rewards", body = SubmissionRewardsDto),
        (status = 400, description = "Invalid submission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn external_art_rewards(
    State(state): State<AppState>,
    Json(payload): Json<ExternalArtSubmissionDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SubmissionService::new(&state.db);

    let rewards = service.external_art_rewards(&ExternalArtSubmission::from_dto(payload))?;

    Ok((StatusCode::OK, Json(rewards.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/submissions/external/writing/rewards",
    tag = SUBMISSION_TAG,
    request_body = ExternalWritingSubmissionDto,
    responses(
        (status = 200, description = "Successfully calculated rewards", body = SubmissionRewardsDto),
        (status = 400, description = "Negative word count", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn external_writing_rewards(
    State(state): State<AppState>,
    Json(payload): Json<ExternalWritingSubmissionDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SubmissionService::new(&state.db);

    let rewards = service.external_writing_rewards(payload.word_count)?;

    Ok((StatusCode::OK, Json(rewards.into_dto())))
}

/// Store a submission and hand out its rewards.
///
/// The rewards are calculated again from the submitted work. The player's
/// trainers get their levels and coins, their monsters level up, and the
/// bonus boss damage hits the active boss.
///
/// # Returns
/// - `201 Created` - What was applied
/// - `400 Bad Request` - Invalid submission or blank title
/// - `404 Not Found` - Unknown trainer or monster
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/submissions",
    tag = SUBMISSION_TAG,
    request_body = ApplySubmissionDto,
    responses(
        (status = 201, description = "Successfully applied rewards", body = AppliedRewardsDto),
        (status = 400, description = "Invalid submission", body = ErrorDto),
        (status = 404, description = "Trainer or monster not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn apply_rewards(
    State(state): State<AppState>,
    Json(payload): Json<ApplySubmissionDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SubmissionService::new(&state.db);

    let applied = service
        .apply(
            &payload.player_user_id,
            SubmissionInput::from_dto(payload.submission),
            payload.title,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(applied.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/submissions",
    tag = SUBMISSION_TAG,
    params(
        ("player_user_id" = String, Query, description = "Player whose submissions to list")
    ),
    responses(
        (status = 200, description = "Successfully retrieved submissions", body = Vec<SubmissionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_submissions(
    State(state): State<AppState>,
    Query(query): Query<PlayerQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SubmissionService::new(&state.db);

    let submissions = service.list_by_player(&query.player_user_id).await?;
    let dtos: Vec<SubmissionDto> = submissions.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/submissions/{submission_id}",
    tag = SUBMISSION_TAG,
    params(
        ("submission_id" = i32, Path, description = "Submission ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved submission", body = SubmissionDto),
        (status = 404, description = "Submission not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_submission(
    State(state): State<AppState>,
    Path(submission_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = SubmissionService::new(&state.db);

    let submission = service.get(submission_id).await?;

    Ok((StatusCode::OK, Json(submission.into_dto())))
}
