use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::entity::wall;
use crate::domain::comment::dto::CommentResponse;
use crate::utils::to_utc;

pub const WALL_TITLE_MAX_LENGTH: u64 = 50;

/// 벽 목록 조회 쿼리 파라미터
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WallListQuery {
    /// 페이지 번호 (1부터 시작, 기본값 1)
    pub page: Option<i64>,
    /// 페이지 크기 (1~100, 기본값 10)
    pub page_size: Option<i64>,
    /// 정렬 필드 (id, title, content, created_on, modified_on; 기본값 created_on)
    pub sort_by: Option<String>,
    /// "desc"(기본값)이면 내림차순, 그 외에는 오름차순
    pub order: Option<String>,
    /// 제목 검색어 (대소문자 무시 부분 일치)
    pub search: Option<String>,
}

/// 벽 생성 요청
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateWallRequest {
    #[validate(
        required(message = "This field is required."),
        length(
            min = 1,
            max = 50,
            message = "Ensure this field is not blank and has no more than 50 characters."
        )
    )]
    #[schema(example = "Hello wall")]
    pub title: Option<String>,

    #[validate(
        required(message = "This field is required."),
        length(min = 1, message = "This field may not be blank.")
    )]
    #[schema(example = "First post on the wall.")]
    pub content: Option<String>,
}

impl CreateWallRequest {
    /// 앞뒤 공백 제거 (공백뿐인 값은 빈 문자열로 검증됨)
    pub fn normalized(mut self) -> Self {
        self.title = self.title.map(|t| t.trim().to_string());
        self.content = self.content.map(|c| c.trim().to_string());
        self
    }
}

/// 벽 수정 요청 (부분 수정, 보낸 필드만 반영)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateWallRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "Ensure this field is not blank and has no more than 50 characters."
    ))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub content: Option<String>,
}

impl UpdateWallRequest {
    pub fn normalized(mut self) -> Self {
        self.title = self.title.map(|t| t.trim().to_string());
        self.content = self.content.map(|c| c.trim().to_string());
        self
    }
}

/// 벽 응답
#[derive(Debug, Serialize, ToSchema)]
pub struct WallResponse {
    #[schema(example = 1)]
    pub id: i64,
    pub title: String,
    pub content: String,
    /// 좋아요 수
    #[schema(example = 3)]
    pub likes: u64,
    /// 싫어요 수
    #[schema(example = 0)]
    pub dis_likes: u64,
    pub created_on: DateTime<Utc>,
    /// 최신순 댓글 목록
    pub comments: Vec<CommentResponse>,
    pub modified_on: DateTime<Utc>,
    pub created_by: Option<String>,
    pub modified_by: Option<String>,
}

/// 벽별 좋아요/싫어요 수
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReactionCounts {
    pub likes: u64,
    pub dis_likes: u64,
}

impl WallResponse {
    pub fn from_model(
        model: wall::Model,
        counts: ReactionCounts,
        comments: Vec<CommentResponse>,
        usernames: &HashMap<i64, String>,
    ) -> Self {
        let lookup = |id: Option<i64>| id.and_then(|id| usernames.get(&id).cloned());

        Self {
            id: model.wall_id,
            created_by: lookup(model.created_by),
            modified_by: lookup(model.modified_by),
            title: model.title,
            content: model.content,
            likes: counts.likes,
            dis_likes: counts.dis_likes,
            created_on: to_utc(model.created_on),
            comments,
            modified_on: to_utc(model.modified_on),
        }
    }
}

/// 벽 단건 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessWallResponse {
    #[schema(example = 1)]
    pub status: u8,
    pub message: String,
    pub data: WallResponse,
}

/// 벽 목록 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessWallListResponse {
    #[schema(example = 1)]
    pub status: u8,
    pub message: String,
    pub data: Vec<WallResponse>,
    #[schema(example = 15)]
    pub count: u64,
    #[schema(example = 2)]
    pub total_page: u64,
    pub next: bool,
    pub previous: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_wall() -> wall::Model {
        let at = NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        wall::Model {
            wall_id: 3,
            title: "T1".into(),
            content: "C1".into(),
            created_on: at,
            modified_on: at,
            created_by: Some(1),
            modified_by: None,
        }
    }

    #[test]
    fn should_serialize_wall_with_expected_field_names() {
        let usernames = HashMap::from([(1, "alice".to_string())]);
        let response = WallResponse::from_model(
            sample_wall(),
            ReactionCounts {
                likes: 2,
                dis_likes: 1,
            },
            vec![],
            &usernames,
        );

        let value = serde_json::to_value(&response).unwrap();
        let object = value.as_object().unwrap();

        for key in [
            "id",
            "title",
            "content",
            "likes",
            "dis_likes",
            "created_on",
            "comments",
            "modified_on",
            "created_by",
            "modified_by",
        ] {
            assert!(object.contains_key(key), "missing field {}", key);
        }
        assert_eq!(value["likes"], 2);
        assert_eq!(value["dis_likes"], 1);
        assert_eq!(value["created_by"], "alice");
        assert!(value["modified_by"].is_null());
    }

    #[test]
    fn create_request_should_require_title_and_content() {
        let req = CreateWallRequest {
            title: None,
            content: None,
        };

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("content"));
    }

    #[test]
    fn create_request_should_reject_title_over_50_chars() {
        let req = CreateWallRequest {
            title: Some("a".repeat(WALL_TITLE_MAX_LENGTH as usize + 1)),
            content: Some("c".into()),
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn create_request_should_accept_title_of_exactly_50_chars() {
        let req = CreateWallRequest {
            title: Some("a".repeat(WALL_TITLE_MAX_LENGTH as usize)),
            content: Some("c".into()),
        };

        assert!(req.validate().is_ok());
    }

    #[test]
    fn normalized_should_turn_whitespace_title_into_blank() {
        let req = CreateWallRequest {
            title: Some("   ".into()),
            content: Some("c".into()),
        }
        .normalized();

        assert_eq!(req.title.as_deref(), Some(""));
        assert!(req.validate().is_err());
    }

    #[test]
    fn update_request_should_allow_partial_body() {
        let req = UpdateWallRequest {
            title: None,
            content: Some("new".into()),
        };

        assert!(req.validate().is_ok());
    }
}
