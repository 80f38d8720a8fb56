use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::wall::entity::comment;
use crate::utils::to_utc;

pub const COMMENT_CONTENT_MAX_LENGTH: u64 = 200;

/// 댓글 생성 요청
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCommentRequest {
    /// 댓글이 달릴 벽 ID
    #[schema(example = 1)]
    pub wall: Option<i64>,

    #[validate(
        required(message = "This field is required."),
        length(
            min = 1,
            max = 200,
            message = "Ensure this field is not blank and has no more than 200 characters."
        )
    )]
    #[schema(example = "Nice post!")]
    pub comment_content: Option<String>,
}

impl CreateCommentRequest {
    /// 앞뒤 공백 제거 (공백뿐인 값은 빈 문자열로 검증됨)
    pub fn normalized(mut self) -> Self {
        self.comment_content = self.comment_content.map(|c| c.trim().to_string());
        self
    }
}

/// 댓글 수정 요청 (부분 수정)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCommentRequest {
    pub wall: Option<i64>,

    #[validate(length(
        min = 1,
        max = 200,
        message = "Ensure this field is not blank and has no more than 200 characters."
    ))]
    pub comment_content: Option<String>,
}

impl UpdateCommentRequest {
    pub fn normalized(mut self) -> Self {
        self.comment_content = self.comment_content.map(|c| c.trim().to_string());
        self
    }
}

/// 댓글 응답
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CommentResponse {
    #[schema(example = 7)]
    pub id: i64,
    /// 소속 벽 ID
    #[schema(example = 1)]
    pub wall: Option<i64>,
    pub comment_content: String,
    pub created_on: DateTime<Utc>,
    pub modified_on: DateTime<Utc>,
    /// 작성자 username
    pub created_by: Option<String>,
    /// 마지막 수정자 username
    pub modified_by: Option<String>,
}

impl CommentResponse {
    pub fn from_model(model: comment::Model, usernames: &HashMap<i64, String>) -> Self {
        let lookup = |id: Option<i64>| id.and_then(|id| usernames.get(&id).cloned());

        Self {
            id: model.comment_id,
            wall: model.wall_id,
            created_by: lookup(model.created_by),
            modified_by: lookup(model.modified_by),
            comment_content: model.comment_content,
            created_on: to_utc(model.created_on),
            modified_on: to_utc(model.modified_on),
        }
    }
}

/// 댓글 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessCommentResponse {
    #[schema(example = 1)]
    pub status: u8,
    pub message: String,
    pub data: CommentResponse,
}
