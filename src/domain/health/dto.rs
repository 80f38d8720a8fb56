use serde::Serialize;
use utoipa::ToSchema;

/// 헬스체크 응답
#[derive(Serialize, Debug, ToSchema)]
pub struct HealthStatus {
    pub status: HealthState,
    #[schema(example = "0.1.0")]
    pub version: &'static str,
    /// 서버 가동 시간 (초)
    #[schema(example = 3600)]
    pub uptime_secs: u64,
    pub checks: HealthChecks,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    /// DB 응답이 느림
    Degraded,
    /// DB에 닿지 못함
    Unhealthy,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthChecks {
    pub database: CheckResult,
}

/// 의존성 한 개의 점검 결과
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct CheckResult {
    #[schema(example = true)]
    pub status: bool,
    #[schema(example = 2)]
    pub latency_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckResult {
    pub fn success(latency_ms: u64) -> Self {
        Self {
            status: true,
            latency_ms,
            error: None,
        }
    }

    pub fn failure(latency_ms: u64, error: impl Into<String>) -> Self {
        Self {
            status: false,
            latency_ms,
            error: Some(error.into()),
        }
    }

    pub fn timeout(latency_ms: u64) -> Self {
        Self::failure(latency_ms, "Timeout")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healthy_status_should_omit_error() {
        let status = HealthStatus {
            status: HealthState::Healthy,
            version: "0.1.0",
            uptime_secs: 42,
            checks: HealthChecks {
                database: CheckResult::success(3),
            },
        };

        let value = serde_json::to_value(&status).unwrap();

        assert_eq!(value["status"], "healthy");
        assert_eq!(value["uptime_secs"], 42);
        assert_eq!(value["checks"]["database"]["latency_ms"], 3);
        assert!(value["checks"]["database"].get("error").is_none());
    }

    #[test]
    fn timeout_should_be_a_failure_with_message() {
        let result = CheckResult::timeout(3000);

        assert!(!result.status);
        assert_eq!(result.error.as_deref(), Some("Timeout"));
    }
}
