use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};

use super::service::ReactionService;
use crate::domain::wall::entity::reaction_set::ReactionKind;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppError;
use crate::utils::BaseResponse;

/// 좋아요 토글 API
///
/// 이미 좋아요 상태면 해제하고, 아니면 좋아요로 바꾸면서 싫어요를 해제합니다.
#[utoipa::path(
    get,
    path = "/likes/{wall_id}/",
    params(
        ("wall_id" = i64, Path, description = "벽 ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "토글 성공", body = crate::utils::response::SuccessMessageResponse),
        (status = 401, description = "인증 실패", body = crate::utils::response::ErrorResponse),
        (status = 404, description = "벽 없음", body = crate::utils::response::ErrorResponse)
    ),
    tag = "Reaction"
)]
pub async fn toggle_like(
    State(state): State<AppState>,
    user: AuthUser,
    wall_id: Result<Path<i64>, PathRejection>,
) -> Result<(StatusCode, Json<BaseResponse<()>>), AppError> {
    let Path(wall_id) = wall_id?;

    ReactionService::toggle(&state, wall_id, user.user_id, ReactionKind::Like).await?;

    Ok((
        StatusCode::OK,
        Json(BaseResponse::message("Like updated successfully.")),
    ))
}

/// 싫어요 토글 API
#[utoipa::path(
    get,
    path = "/dislikes/{wall_id}/",
    params(
        ("wall_id" = i64, Path, description = "벽 ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "토글 성공", body = crate::utils::response::SuccessMessageResponse),
        (status = 401, description = "인증 실패", body = crate::utils::response::ErrorResponse),
        (status = 404, description = "벽 없음", body = crate::utils::response::ErrorResponse)
    ),
    tag = "Reaction"
)]
pub async fn toggle_dislike(
    State(state): State<AppState>,
    user: AuthUser,
    wall_id: Result<Path<i64>, PathRejection>,
) -> Result<(StatusCode, Json<BaseResponse<()>>), AppError> {
    let Path(wall_id) = wall_id?;

    ReactionService::toggle(&state, wall_id, user.user_id, ReactionKind::Dislike).await?;

    Ok((
        StatusCode::OK,
        Json(BaseResponse::message("Dislike updated successfully.")),
    ))
}
