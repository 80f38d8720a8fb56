use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

/// 필드별 검증 에러 목록 (`{"title": ["..."]}`)
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// 모든 엔드포인트가 공유하는 응답 봉투
///
/// 형식:
/// ```json
/// {
///   "status": 1,
///   "message": "All walls retrieved successfully.",
///   "data": [ ... ],
///   "count": 15,
///   "total_page": 2,
///   "next": true,
///   "previous": false
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct BaseResponse<T: Serialize> {
    pub status: u8,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<bool>,
}

impl<T: Serialize> BaseResponse<T> {
    /// 데이터를 포함한 성공 응답 생성
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: 1,
            message: message.into(),
            data: Some(data),
            count: None,
            total_page: None,
            next: None,
            previous: None,
        }
    }

    /// 페이지 정보를 포함한 목록 응답 생성
    pub fn page(message: impl Into<String>, page: Page<T>) -> Self {
        Self {
            status: 1,
            message: message.into(),
            data: Some(page.items),
            count: Some(page.count),
            total_page: Some(page.total_page),
            next: Some(page.next),
            previous: Some(page.previous),
        }
    }
}

impl BaseResponse<()> {
    /// 메시지만 있는 성공 응답 생성 (삭제, 좋아요 토글 등)
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: 1,
            message: message.into(),
            data: None,
            count: None,
            total_page: None,
            next: None,
            previous: None,
        }
    }
}

/// 한 페이지 분량의 결과
#[derive(Debug)]
pub struct Page<T> {
    pub items: T,
    pub count: u64,
    pub total_page: u64,
    pub next: bool,
    pub previous: bool,
}

/// 실패 메시지: 고정 문자열 또는 필드별 검증 에러
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ErrorMessage {
    Text(String),
    Fields(BTreeMap<String, Vec<String>>),
}

/// 에러 응답 구조체
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = 0)]
    pub status: u8,
    pub message: ErrorMessage,
}

impl ErrorResponse {
    /// 에러 응답 생성
    pub fn new(message: ErrorMessage) -> Self {
        Self { status: 0, message }
    }
}

/// 메시지만 있는 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessMessageResponse {
    #[schema(example = 1)]
    pub status: u8,
    pub message: String,
}
