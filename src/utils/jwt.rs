use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::error::AppError;

const ACCESS_TOKEN_TYPE: &str = "access";

/// JWT Claims 구조체
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (User ID)
    pub sub: String,
    /// Issued At
    pub iat: usize,
    /// Expiration
    pub exp: usize,
    /// Token Type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

impl Claims {
    /// Subject에서 사용자 ID 추출
    pub fn user_id(&self) -> Result<i64, AppError> {
        self.sub
            .parse()
            .map_err(|_| AppError::unauthorized("Invalid user id in token."))
    }
}

/// Access Token 생성
///
/// 토큰 발급은 외부 인증 서비스 책임이며, 같은 서명 키로 발급된 토큰만 통과합니다.
pub fn encode_token(user_id: i64, secret: &str, expiration_seconds: i64) -> Result<String, AppError> {
    let now = Utc::now();
    let expiration = now
        .checked_add_signed(Duration::seconds(expiration_seconds))
        .ok_or_else(|| AppError::InternalError("Token expiration overflow".into()))?
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp() as usize,
        exp: expiration,
        token_type: Some(ACCESS_TOKEN_TYPE.to_string()),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalError(format!("Token creation failed: {}", e)))
}

/// Access Token 검증 (다른 타입의 토큰은 거부)
pub fn decode_access_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            AppError::unauthorized("Token has expired.")
        }
        _ => AppError::unauthorized("Invalid token."),
    })?;

    match claims.token_type.as_deref() {
        Some(ACCESS_TOKEN_TYPE) => Ok(claims),
        _ => Err(AppError::unauthorized("Invalid token type.")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_and_decode() {
        let secret = "test_secret";

        let token = encode_token(42, secret, 3600).expect("Token generation failed");
        let claims = decode_access_token(&token, secret).expect("Token validation failed");

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.user_id().unwrap(), 42);
    }

    #[test]
    fn test_invalid_token() {
        let result = decode_access_token("invalid_token", "test_secret");
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn test_wrong_secret() {
        let token = encode_token(1, "secret_a", 3600).unwrap();
        let result = decode_access_token(&token, "secret_b");
        assert!(result.is_err());
    }

    #[test]
    fn test_expired_token() {
        // jsonwebtoken 기본 leeway(60초)보다 과거로 만료
        let token = encode_token(1, "test_secret", -3600).unwrap();
        let result = decode_access_token(&token, "test_secret");

        match result {
            Err(AppError::Unauthorized(msg)) => assert_eq!(msg, "Token has expired."),
            other => panic!("expected expired token error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_access_token_rejected() {
        let claims = Claims {
            sub: "1".into(),
            iat: Utc::now().timestamp() as usize,
            exp: (Utc::now().timestamp() + 3600) as usize,
            token_type: Some("refresh".into()),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test_secret"),
        )
        .unwrap();

        let result = decode_access_token(&token, "test_secret");
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }
}
