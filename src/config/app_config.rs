use std::env;

/// 애플리케이션 설정
///
/// 프로세스 시작 시 한 번 생성되어 `AppState`를 통해 전달됩니다.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,

    // Database
    pub database_url: String,
    pub db_schema_update: bool,
    pub db_max_connections: u32,

    // JWT (외부 인증 서비스와 공유하는 서명 키)
    pub jwt_secret: String,

    // 프론트엔드 주소 (CORS 허용 origin)
    pub site_url: String,
}

impl AppConfig {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            tracing::warn!("DATABASE_URL 환경변수가 설정되지 않아 로컬 SQLite 파일을 사용합니다.");
            "sqlite://wall.db?mode=rwc".to_string()
        });

        let db_schema_update = parse_bool(env::var("DB_SCHEMA_UPDATE").ok().as_deref());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or(ConfigError::InvalidPoolSize)?;

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!(
                "JWT_SECRET 환경변수가 설정되지 않았습니다. 프로덕션 환경에서는 반드시 설정하세요."
            );
            "secret".to_string()
        });

        let site_url =
            env::var("SITE_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());

        Ok(Self {
            server_port,
            database_url,
            db_schema_update,
            db_max_connections,
            jwt_secret,
            site_url,
        })
    }

    /// 테스트 및 로컬 실행용 설정 (인메모리 SQLite, 스키마 자동 생성)
    pub fn for_test(jwt_secret: impl Into<String>) -> Self {
        Self {
            server_port: 0,
            database_url: "sqlite::memory:".to_string(),
            db_schema_update: true,
            db_max_connections: 1,
            jwt_secret: jwt_secret.into(),
            site_url: "http://127.0.0.1:3000".to_string(),
        }
    }
}

/// `DB_SCHEMA_UPDATE` 값 해석. 잘못된 값은 false로 취급합니다.
fn parse_bool(value: Option<&str>) -> bool {
    match value {
        None => false,
        Some(raw) => raw.trim().parse::<bool>().unwrap_or_else(|_| {
            tracing::warn!(
                value = raw,
                "Invalid DB_SCHEMA_UPDATE value, defaulting to false. Use 'true' or 'false'."
            );
            false
        }),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,
    #[error("DB_MAX_CONNECTIONS must be a positive integer")]
    InvalidPoolSize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_should_accept_true() {
        assert!(parse_bool(Some("true")));
        assert!(parse_bool(Some(" true ")));
    }

    #[test]
    fn parse_bool_should_default_to_false() {
        assert!(!parse_bool(None));
        assert!(!parse_bool(Some("false")));
        assert!(!parse_bool(Some("yes")));
    }

    #[test]
    fn test_config_should_use_in_memory_sqlite() {
        let config = AppConfig::for_test("test_secret");

        assert_eq!(config.database_url, "sqlite::memory:");
        assert!(config.db_schema_update);
        assert_eq!(config.db_max_connections, 1);
        assert_eq!(config.jwt_secret, "test_secret");
    }
}
