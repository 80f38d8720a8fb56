use std::sync::OnceLock;
use std::time::{Duration, Instant};

use sea_orm::DatabaseConnection;
use tokio::time::timeout;

use super::dto::{CheckResult, HealthChecks, HealthState, HealthStatus};

static START_TIME: OnceLock<Instant> = OnceLock::new();

const DB_PING_TIMEOUT: Duration = Duration::from_secs(3);

/// 이 시간 이상 걸린 ping은 Degraded
const DEGRADED_THRESHOLD: Duration = Duration::from_millis(500);

/// 서버 시작 시각 기록 (main에서 한 번 호출)
pub fn init_start_time() {
    START_TIME.get_or_init(Instant::now);
}

pub fn get_uptime_secs() -> u64 {
    START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0)
}

pub async fn check_health(db: &DatabaseConnection) -> HealthStatus {
    let database = check_database(db).await;

    HealthStatus {
        status: determine_health_state(&database),
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: get_uptime_secs(),
        checks: HealthChecks { database },
    }
}

fn determine_health_state(check: &CheckResult) -> HealthState {
    if !check.status {
        return HealthState::Unhealthy;
    }

    if check.latency_ms >= DEGRADED_THRESHOLD.as_millis() as u64 {
        HealthState::Degraded
    } else {
        HealthState::Healthy
    }
}

async fn check_database(db: &DatabaseConnection) -> CheckResult {
    let start = Instant::now();
    let result = timeout(DB_PING_TIMEOUT, db.ping()).await;
    let latency_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(Ok(())) => {
            tracing::debug!(latency_ms, "database ping ok");
            CheckResult::success(latency_ms)
        }
        Ok(Err(e)) => {
            tracing::warn!(latency_ms, error = %e, "database ping failed");
            CheckResult::failure(latency_ms, e.to_string())
        }
        Err(_) => {
            tracing::warn!("database ping timed out");
            CheckResult::timeout(latency_ms)
        }
    }
}
