use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use tracing::{error, warn};
use validator::ValidationErrors;

use super::response::{ErrorMessage, ErrorResponse, FieldErrors};

/// 애플리케이션 전역 에러 타입
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Unauthorized(String),
    WallNotFound(String),
    CommentNotFound(String),
    InternalError(String),
    ValidationError(FieldErrors),
    JsonParseFailed(String),
}

impl AppError {
    /// 에러 메시지 반환
    pub fn message(&self) -> ErrorMessage {
        match self {
            AppError::BadRequest(msg)
            | AppError::Unauthorized(msg)
            | AppError::WallNotFound(msg)
            | AppError::CommentNotFound(msg)
            | AppError::InternalError(msg) => ErrorMessage::Text(msg.clone()),
            AppError::ValidationError(fields) => ErrorMessage::Fields(fields.clone()),
            AppError::JsonParseFailed(msg) => {
                ErrorMessage::Text(format!("Malformed request body: {}", msg))
            }
        }
    }

    /// HTTP 상태 코드 반환
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::WallNotFound(_) => StatusCode::NOT_FOUND,
            AppError::CommentNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::JsonParseFailed(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        // 에러 로깅
        match &self {
            AppError::InternalError(msg) => {
                error!("Internal Server Error: {}", msg);
            }
            _ => {
                warn!(status = status.as_u16(), message = ?message, "request failed");
            }
        }

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// JsonRejection을 AppError로 변환
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::JsonParseFailed(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// validator 에러를 필드별 메시지 목록으로 변환
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("Invalid value ({}).", e.code))
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();

        AppError::ValidationError(fields)
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::InternalError(err.to_string())
    }
}

/// 편의 함수들
impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        AppError::Unauthorized(msg.into())
    }

    /// 단일 필드 검증 에러
    pub fn field_error(field: impl Into<String>, msg: impl Into<String>) -> Self {
        let mut fields = FieldErrors::new();
        fields.insert(field.into(), vec![msg.into()]);
        AppError::ValidationError(fields)
    }
}
