use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use super::dto::{CommentResponse, CreateCommentRequest, UpdateCommentRequest};
use super::service::CommentService;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppError;
use crate::utils::BaseResponse;

type ApiResult<T> = Result<(StatusCode, Json<BaseResponse<T>>), AppError>;

/// 댓글 작성 API
#[utoipa::path(
    post,
    path = "/comment/list/",
    request_body = CreateCommentRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "댓글 작성 성공", body = crate::domain::comment::dto::SuccessCommentResponse),
        (status = 400, description = "검증 실패 (없는 벽 포함)", body = crate::utils::response::ErrorResponse),
        (status = 401, description = "인증 실패", body = crate::utils::response::ErrorResponse)
    ),
    tag = "Comment"
)]
pub async fn create_comment(
    State(state): State<AppState>,
    user: AuthUser,
    req: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> ApiResult<CommentResponse> {
    let Json(req) = req?;

    let comment = CommentService::create_comment(&state, &user, req).await?;

    Ok((
        StatusCode::CREATED,
        Json(BaseResponse::success("Comment created successfully.", comment)),
    ))
}

#[utoipa::path(
    get,
    path = "/comment/details/{id}/",
    params(
        ("id" = i64, Path, description = "댓글 ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "조회 성공", body = crate::domain::comment::dto::SuccessCommentResponse),
        (status = 401, description = "인증 실패", body = crate::utils::response::ErrorResponse),
        (status = 404, description = "댓글 없음", body = crate::utils::response::ErrorResponse)
    ),
    tag = "Comment"
)]
pub async fn get_comment(
    State(state): State<AppState>,
    _user: AuthUser,
    comment_id: Result<Path<i64>, PathRejection>,
) -> ApiResult<CommentResponse> {
    let Path(comment_id) = comment_id?;

    let comment = CommentService::get_comment(&state, comment_id).await?;

    Ok((
        StatusCode::OK,
        Json(BaseResponse::success("Comment retrieved successfully.", comment)),
    ))
}

/// 댓글 수정 API (부분 수정)
#[utoipa::path(
    put,
    path = "/comment/details/{id}/",
    params(
        ("id" = i64, Path, description = "댓글 ID")
    ),
    request_body = UpdateCommentRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "수정 성공", body = crate::domain::comment::dto::SuccessCommentResponse),
        (status = 400, description = "검증 실패", body = crate::utils::response::ErrorResponse),
        (status = 401, description = "인증 실패", body = crate::utils::response::ErrorResponse),
        (status = 404, description = "댓글 없음", body = crate::utils::response::ErrorResponse)
    ),
    tag = "Comment"
)]
pub async fn update_comment(
    State(state): State<AppState>,
    user: AuthUser,
    comment_id: Result<Path<i64>, PathRejection>,
    req: Result<Json<UpdateCommentRequest>, JsonRejection>,
) -> ApiResult<CommentResponse> {
    let Path(comment_id) = comment_id?;
    let Json(req) = req?;

    let comment = CommentService::update_comment(&state, &user, comment_id, req).await?;

    Ok((
        StatusCode::CREATED,
        Json(BaseResponse::success("Comment updated successfully.", comment)),
    ))
}

#[utoipa::path(
    delete,
    path = "/comment/details/{id}/",
    params(
        ("id" = i64, Path, description = "댓글 ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "삭제 성공", body = crate::utils::response::SuccessMessageResponse),
        (status = 401, description = "인증 실패", body = crate::utils::response::ErrorResponse),
        (status = 404, description = "댓글 없음", body = crate::utils::response::ErrorResponse)
    ),
    tag = "Comment"
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    user: AuthUser,
    comment_id: Result<Path<i64>, PathRejection>,
) -> ApiResult<()> {
    let Path(comment_id) = comment_id?;

    CommentService::delete_comment(&state, &user, comment_id).await?;

    Ok((
        StatusCode::OK,
        Json(BaseResponse::message("Comment deleted successfully.")),
    ))
}
