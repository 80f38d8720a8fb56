use axum::{extract::State, http::StatusCode, Json};

use super::dto::{HealthState, HealthStatus};
use super::service::check_health;
use crate::state::AppState;

/// 헬스체크 API
///
/// 서버 상태, 버전, 가동 시간, DB 연결 상태를 반환합니다. DB에 닿지 못하면 503.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "정상 또는 지연", body = HealthStatus),
        (status = 503, description = "DB 연결 불가", body = HealthStatus)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    let status = check_health(&state.db).await;

    let code = match status.status {
        HealthState::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        HealthState::Healthy | HealthState::Degraded => StatusCode::OK,
    };

    (code, Json(status))
}
