use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, PaginatorTrait, Set};
use tracing::info;
use validator::Validate;

use super::dto::{CommentResponse, CreateCommentRequest, UpdateCommentRequest};
use crate::domain::user::service::UserService;
use crate::domain::wall::entity::{comment, wall};
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppError;

pub const COMMENT_DOES_NOT_EXIST: &str = "Comment does not exist.";

pub struct CommentService;

impl CommentService {
    pub async fn create_comment(
        state: &AppState,
        user: &AuthUser,
        req: CreateCommentRequest,
    ) -> Result<CommentResponse, AppError> {
        let req = req.normalized();
        req.validate()?;

        if let Some(wall_id) = req.wall {
            Self::ensure_wall_exists(&state.db, wall_id).await?;
        }

        let now = Utc::now().naive_utc();
        let model = comment::ActiveModel {
            wall_id: Set(req.wall),
            comment_content: Set(req.comment_content.unwrap_or_default()),
            created_on: Set(now),
            modified_on: Set(now),
            created_by: Set(Some(user.user_id)),
            modified_by: Set(Some(user.user_id)),
            ..Default::default()
        }
        .insert(&state.db)
        .await?;

        info!(
            comment_id = model.comment_id,
            wall_id = ?model.wall_id,
            user_id = user.user_id,
            "댓글 생성 완료"
        );

        Self::to_response(&state.db, model).await
    }

    pub async fn get_comment(
        state: &AppState,
        comment_id: i64,
    ) -> Result<CommentResponse, AppError> {
        let model = Self::find_comment(&state.db, comment_id).await?;
        Self::to_response(&state.db, model).await
    }

    /// 댓글 수정 (보낸 필드만 반영)
    pub async fn update_comment(
        state: &AppState,
        user: &AuthUser,
        comment_id: i64,
        req: UpdateCommentRequest,
    ) -> Result<CommentResponse, AppError> {
        let model = Self::find_comment(&state.db, comment_id).await?;

        let req = req.normalized();
        req.validate()?;

        let mut active: comment::ActiveModel = model.into();
        if let Some(wall_id) = req.wall {
            Self::ensure_wall_exists(&state.db, wall_id).await?;
            active.wall_id = Set(Some(wall_id));
        }
        if let Some(content) = req.comment_content {
            active.comment_content = Set(content);
        }
        active.modified_on = Set(Utc::now().naive_utc());
        active.modified_by = Set(Some(user.user_id));

        let updated = active.update(&state.db).await?;

        info!(comment_id = comment_id, user_id = user.user_id, "댓글 수정 완료");

        Self::to_response(&state.db, updated).await
    }

    pub async fn delete_comment(
        state: &AppState,
        user: &AuthUser,
        comment_id: i64,
    ) -> Result<(), AppError> {
        let result = comment::Entity::delete_by_id(comment_id)
            .exec(&state.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::CommentNotFound(COMMENT_DOES_NOT_EXIST.to_string()));
        }

        info!(comment_id = comment_id, user_id = user.user_id, "댓글 삭제 완료");

        Ok(())
    }

    async fn find_comment<C: ConnectionTrait>(
        db: &C,
        comment_id: i64,
    ) -> Result<comment::Model, AppError> {
        comment::Entity::find_by_id(comment_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::CommentNotFound(COMMENT_DOES_NOT_EXIST.to_string()))
    }

    /// 참조한 벽이 없으면 `wall` 필드 검증 에러
    async fn ensure_wall_exists<C: ConnectionTrait>(db: &C, wall_id: i64) -> Result<(), AppError> {
        let exists = wall::Entity::find_by_id(wall_id).count(db).await? > 0;

        if !exists {
            return Err(AppError::field_error(
                "wall",
                format!("Invalid pk \"{}\" - object does not exist.", wall_id),
            ));
        }

        Ok(())
    }

    async fn to_response<C: ConnectionTrait>(
        db: &C,
        model: comment::Model,
    ) -> Result<CommentResponse, AppError> {
        let usernames =
            UserService::usernames(db, [model.created_by, model.modified_by].into_iter().flatten())
                .await?;

        Ok(CommentResponse::from_model(model, &usernames))
    }
}
