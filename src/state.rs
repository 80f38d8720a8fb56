use crate::config::AppConfig;
use sea_orm::DatabaseConnection;

/// 모든 핸들러가 공유하는 상태 (DB 커넥션 풀, 설정)
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// JWT 검증 키, CORS origin 등
    pub config: AppConfig,
}
