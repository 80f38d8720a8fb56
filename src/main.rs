use std::net::SocketAddr;

use wall_server::config::{establish_connection, AppConfig};
use wall_server::domain::health::init_start_time;
use wall_server::shutdown::shutdown_signal;
use wall_server::utils::logging::init_logging;
use wall_server::{app, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 환경변수 로드
    dotenvy::dotenv().ok();

    // 2. 로깅 초기화 (guard는 종료 시까지 유지)
    let _log_guard = init_logging();
    init_start_time();

    // 3. 설정 로드
    let config = AppConfig::from_env()?;

    // 4. DB 연결 (+ 스키마 동기화)
    let db = establish_connection(&config).await?;

    // 5. 라우터 설정
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let app = app(AppState { db, config });

    // 6. 서버 실행
    tracing::info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}
