use axum::{
    async_trait, extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts,
};
use axum_extra::extract::cookie::CookieJar;
use sea_orm::EntityTrait;

use crate::domain::user::entity::user;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::jwt::decode_access_token;

/// access token 쿠키 이름
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// 인증된 사용자 정보를 담는 Extractor
///
/// 토큰 검증 후 `users` 테이블에서 사용자를 조회합니다.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i64,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // 1. Authorization 헤더, 없으면 쿠키에서 토큰 추출
        let token = match parts.headers.get(AUTHORIZATION) {
            Some(auth_header) => {
                let auth_header_str = auth_header
                    .to_str()
                    .map_err(|_| AppError::unauthorized("Malformed authorization header."))?;

                auth_header_str
                    .strip_prefix("Bearer ")
                    .ok_or_else(|| AppError::unauthorized("Invalid token format."))?
                    .to_string()
            }
            None => extract_token_from_cookie(parts)?,
        };

        // 2. 토큰 검증 및 디코딩 (access token만 허용)
        let claims = decode_access_token(&token, &state.config.jwt_secret)?;
        let user_id = claims.user_id()?;

        // 3. 사용자 존재 확인
        let user = user::Entity::find_by_id(user_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| AppError::unauthorized("User not found."))?;

        Ok(AuthUser {
            user_id: user.user_id,
        })
    }
}

/// 쿠키에서 access_token 추출
fn extract_token_from_cookie(parts: &Parts) -> Result<String, AppError> {
    let jar = CookieJar::from_headers(&parts.headers);

    jar.get(ACCESS_TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::unauthorized("Authentication credentials were not provided."))
}
