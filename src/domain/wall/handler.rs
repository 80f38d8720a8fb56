use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};

use super::dto::{CreateWallRequest, UpdateWallRequest, WallListQuery, WallResponse};
use super::service::WallService;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppError;
use crate::utils::BaseResponse;

type ApiResult<T> = Result<(StatusCode, Json<BaseResponse<T>>), AppError>;

/// 벽 목록 조회 API
///
/// 검색, 정렬, 페이지네이션을 적용한 벽 목록을 반환합니다.
#[utoipa::path(
    get,
    path = "/walls/list/",
    params(WallListQuery),
    responses(
        (status = 200, description = "목록 조회 성공", body = crate::domain::wall::dto::SuccessWallListResponse),
        (status = 400, description = "잘못된 페이지/정렬 파라미터", body = crate::utils::response::ErrorResponse)
    ),
    tag = "Wall"
)]
pub async fn list_walls(
    State(state): State<AppState>,
    query: Result<Query<WallListQuery>, QueryRejection>,
) -> ApiResult<Vec<WallResponse>> {
    let Query(query) = query?;

    let page = WallService::list_walls(&state, query).await?;

    Ok((
        StatusCode::OK,
        Json(BaseResponse::page("All walls retrieved successfully.", page)),
    ))
}

/// 벽 생성 API
///
/// 벽과 빈 좋아요/싫어요 집합을 함께 생성합니다.
#[utoipa::path(
    post,
    path = "/walls/list/",
    request_body = CreateWallRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "벽 생성 성공", body = crate::domain::wall::dto::SuccessWallResponse),
        (status = 400, description = "검증 실패", body = crate::utils::response::ErrorResponse),
        (status = 401, description = "인증 실패", body = crate::utils::response::ErrorResponse)
    ),
    tag = "Wall"
)]
pub async fn create_wall(
    State(state): State<AppState>,
    user: AuthUser,
    req: Result<Json<CreateWallRequest>, JsonRejection>,
) -> ApiResult<WallResponse> {
    let Json(req) = req?;

    let wall = WallService::create_wall(&state, &user, req).await?;

    Ok((
        StatusCode::CREATED,
        Json(BaseResponse::success("Wall created successfully.", wall)),
    ))
}

/// 벽 상세 조회 API
#[utoipa::path(
    get,
    path = "/walls/details/{id}/",
    params(
        ("id" = i64, Path, description = "벽 ID")
    ),
    responses(
        (status = 200, description = "조회 성공", body = crate::domain::wall::dto::SuccessWallResponse),
        (status = 404, description = "벽 없음", body = crate::utils::response::ErrorResponse)
    ),
    tag = "Wall"
)]
pub async fn get_wall(
    State(state): State<AppState>,
    wall_id: Result<Path<i64>, PathRejection>,
) -> ApiResult<WallResponse> {
    let Path(wall_id) = wall_id?;

    let wall = WallService::get_wall(&state, wall_id).await?;

    Ok((
        StatusCode::OK,
        Json(BaseResponse::success("Wall retrieved successfully.", wall)),
    ))
}

/// 벽 수정 API
///
/// 보낸 필드만 반영하고 수정자/수정 시각을 갱신합니다.
#[utoipa::path(
    put,
    path = "/walls/details/{id}/",
    params(
        ("id" = i64, Path, description = "벽 ID")
    ),
    request_body = UpdateWallRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "수정 성공", body = crate::domain::wall::dto::SuccessWallResponse),
        (status = 400, description = "검증 실패", body = crate::utils::response::ErrorResponse),
        (status = 401, description = "인증 실패", body = crate::utils::response::ErrorResponse),
        (status = 404, description = "벽 없음", body = crate::utils::response::ErrorResponse)
    ),
    tag = "Wall"
)]
pub async fn update_wall(
    State(state): State<AppState>,
    user: AuthUser,
    wall_id: Result<Path<i64>, PathRejection>,
    req: Result<Json<UpdateWallRequest>, JsonRejection>,
) -> ApiResult<WallResponse> {
    let Path(wall_id) = wall_id?;
    let Json(req) = req?;

    let wall = WallService::update_wall(&state, &user, wall_id, req).await?;

    Ok((
        StatusCode::CREATED,
        Json(BaseResponse::success("Wall updated successfully.", wall)),
    ))
}

/// 벽 삭제 API
///
/// 댓글과 좋아요/싫어요도 함께 삭제됩니다.
#[utoipa::path(
    delete,
    path = "/walls/details/{id}/",
    params(
        ("id" = i64, Path, description = "벽 ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "삭제 성공", body = crate::utils::response::SuccessMessageResponse),
        (status = 401, description = "인증 실패", body = crate::utils::response::ErrorResponse),
        (status = 404, description = "벽 없음", body = crate::utils::response::ErrorResponse)
    ),
    tag = "Wall"
)]
pub async fn delete_wall(
    State(state): State<AppState>,
    user: AuthUser,
    wall_id: Result<Path<i64>, PathRejection>,
) -> ApiResult<()> {
    let Path(wall_id) = wall_id?;

    WallService::delete_wall(&state, &user, wall_id).await?;

    Ok((
        StatusCode::OK,
        Json(BaseResponse::message("Wall deleted successfully.")),
    ))
}
