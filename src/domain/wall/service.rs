use std::collections::HashMap;

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, SqlErr,
    TransactionTrait,
};
use tracing::info;
use validator::Validate;

use super::dto::{
    CreateWallRequest, ReactionCounts, UpdateWallRequest, WallListQuery, WallResponse,
};
use super::entity::reaction_set::ReactionKind;
use super::entity::{comment, reaction, reaction_set, wall};
use super::listing::{normalize_search, title_contains, PageRequest, SortField, SortOrder};
use crate::domain::comment::dto::CommentResponse;
use crate::domain::user::service::UserService;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppError;
use crate::utils::response::Page;

pub const WALL_DOES_NOT_EXIST: &str = "Wall does not exist.";
pub const WALL_TITLE_TAKEN: &str = "wall with this title already exists.";

pub struct WallService;

impl WallService {
    /// 벽 목록 조회 (검색 → 정렬 → 페이지)
    pub async fn list_walls(
        state: &AppState,
        query: WallListQuery,
    ) -> Result<Page<Vec<WallResponse>>, AppError> {
        // 1. 파라미터 검증
        let page_request = PageRequest::from_query(query.page, query.page_size)?;
        let sort_field = SortField::parse(query.sort_by.as_deref())?;
        let order = match SortOrder::parse(query.order.as_deref()) {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };
        let search = normalize_search(query.search.as_deref());

        // 2. 검색 + 정렬 (동일 값은 ID로 보조 정렬)
        let mut select = wall::Entity::find();
        if let Some(search) = &search {
            select = select.filter(title_contains(search));
        }
        let select = select
            .order_by(sort_field.column(), order.clone())
            .order_by(wall::Column::WallId, order);

        // 3. 페이지 조회
        let paginator = select.paginate(&state.db, page_request.page_size);
        let count = paginator.num_items().await?;
        let window = page_request.window(count)?;
        let walls = paginator.fetch_page(page_request.index()).await?;

        info!(
            page = page_request.page,
            page_size = page_request.page_size,
            search = ?search,
            count = count,
            returned = walls.len(),
            "벽 목록 조회"
        );

        let items = Self::to_responses(&state.db, walls).await?;

        Ok(Page {
            items,
            count,
            total_page: window.total_page,
            next: window.next,
            previous: window.previous,
        })
    }

    /// 벽 생성
    ///
    /// 벽과 좋아요/싫어요 집합을 하나의 트랜잭션으로 생성합니다.
    pub async fn create_wall(
        state: &AppState,
        user: &AuthUser,
        req: CreateWallRequest,
    ) -> Result<WallResponse, AppError> {
        // 1. 입력 검증
        let req = req.normalized();
        req.validate()?;
        let title = req.title.unwrap_or_default();
        let content = req.content.unwrap_or_default();

        // 2. 트랜잭션 시작
        let txn = state.db.begin().await?;

        // 3. 제목 중복 확인
        Self::ensure_title_available(&txn, &title, None).await?;

        // 4. 벽 생성
        let now = Utc::now().naive_utc();
        let wall_model = wall::ActiveModel {
            title: Set(title),
            content: Set(content),
            created_on: Set(now),
            modified_on: Set(now),
            created_by: Set(Some(user.user_id)),
            modified_by: Set(Some(user.user_id)),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(title_conflict)?;

        // 5. 빈 좋아요/싫어요 집합 생성
        for kind in [ReactionKind::Like, ReactionKind::Dislike] {
            reaction_set::ActiveModel {
                wall_id: Set(wall_model.wall_id),
                kind: Set(kind),
                created_on: Set(now),
                modified_on: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        // 6. 트랜잭션 커밋
        txn.commit().await?;

        info!(
            wall_id = wall_model.wall_id,
            user_id = user.user_id,
            "벽 생성 완료"
        );

        Self::to_response(&state.db, wall_model).await
    }

    /// 벽 단건 조회
    pub async fn get_wall(state: &AppState, wall_id: i64) -> Result<WallResponse, AppError> {
        let wall_model = Self::find_wall(&state.db, wall_id).await?;
        Self::to_response(&state.db, wall_model).await
    }

    /// 벽 수정 (보낸 필드만 반영, 수정자/수정 시각 갱신)
    pub async fn update_wall(
        state: &AppState,
        user: &AuthUser,
        wall_id: i64,
        req: UpdateWallRequest,
    ) -> Result<WallResponse, AppError> {
        let wall_model = Self::find_wall(&state.db, wall_id).await?;

        let req = req.normalized();
        req.validate()?;

        let mut active: wall::ActiveModel = wall_model.clone().into();
        if let Some(title) = req.title {
            if title != wall_model.title {
                Self::ensure_title_available(&state.db, &title, Some(wall_id)).await?;
            }
            active.title = Set(title);
        }
        if let Some(content) = req.content {
            active.content = Set(content);
        }
        active.modified_on = Set(Utc::now().naive_utc());
        active.modified_by = Set(Some(user.user_id));

        let updated = active.update(&state.db).await.map_err(title_conflict)?;

        info!(wall_id = wall_id, user_id = user.user_id, "벽 수정 완료");

        Self::to_response(&state.db, updated).await
    }

    /// 벽 삭제
    ///
    /// 댓글과 좋아요/싫어요 집합은 외래 키 ON DELETE CASCADE로 함께 삭제됩니다.
    pub async fn delete_wall(
        state: &AppState,
        user: &AuthUser,
        wall_id: i64,
    ) -> Result<(), AppError> {
        let result = wall::Entity::delete_by_id(wall_id).exec(&state.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::WallNotFound(WALL_DOES_NOT_EXIST.to_string()));
        }

        info!(wall_id = wall_id, user_id = user.user_id, "벽 삭제 완료");

        Ok(())
    }

    /// ID로 벽 조회. 없으면 WallNotFound.
    pub async fn find_wall<C: ConnectionTrait>(
        db: &C,
        wall_id: i64,
    ) -> Result<wall::Model, AppError> {
        wall::Entity::find_by_id(wall_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::WallNotFound(WALL_DOES_NOT_EXIST.to_string()))
    }

    /// 벽별 좋아요/싫어요 수 집계
    pub async fn reaction_counts<C: ConnectionTrait>(
        db: &C,
        wall_ids: &[i64],
    ) -> Result<HashMap<i64, ReactionCounts>, AppError> {
        if wall_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i64, ReactionKind, i64)> = reaction::Entity::find()
            .select_only()
            .column(reaction::Column::WallId)
            .column(reaction_set::Column::Kind)
            .column_as(
                Expr::col((reaction::Entity, reaction::Column::ReactionId)).count(),
                "total",
            )
            .join(JoinType::InnerJoin, reaction::Relation::ReactionSet.def())
            .filter(reaction::Column::WallId.is_in(wall_ids.to_vec()))
            .group_by(reaction::Column::WallId)
            .group_by(reaction_set::Column::Kind)
            .into_tuple()
            .all(db)
            .await?;

        let mut counts: HashMap<i64, ReactionCounts> = HashMap::new();
        for (wall_id, kind, total) in rows {
            let entry = counts.entry(wall_id).or_default();
            match kind {
                ReactionKind::Like => entry.likes = total.max(0) as u64,
                ReactionKind::Dislike => entry.dis_likes = total.max(0) as u64,
            }
        }

        Ok(counts)
    }

    async fn to_response<C: ConnectionTrait>(
        db: &C,
        wall_model: wall::Model,
    ) -> Result<WallResponse, AppError> {
        let mut responses = Self::to_responses(db, vec![wall_model]).await?;
        responses
            .pop()
            .ok_or_else(|| AppError::InternalError("wall serialization produced no item".into()))
    }

    /// 벽 목록을 응답 DTO로 변환 (댓글, 반응 수, 작성자 이름 일괄 조회)
    async fn to_responses<C: ConnectionTrait>(
        db: &C,
        walls: Vec<wall::Model>,
    ) -> Result<Vec<WallResponse>, AppError> {
        if walls.is_empty() {
            return Ok(vec![]);
        }

        let wall_ids: Vec<i64> = walls.iter().map(|w| w.wall_id).collect();

        // 1. 댓글 (최신순)
        let comments = comment::Entity::find()
            .filter(comment::Column::WallId.is_in(wall_ids.clone()))
            .order_by_desc(comment::Column::CreatedOn)
            .order_by_desc(comment::Column::CommentId)
            .all(db)
            .await?;

        // 2. 반응 수
        let counts = Self::reaction_counts(db, &wall_ids).await?;

        // 3. 작성자/수정자 이름
        let user_ids: Vec<i64> = walls
            .iter()
            .flat_map(|w| [w.created_by, w.modified_by])
            .chain(comments.iter().flat_map(|c| [c.created_by, c.modified_by]))
            .flatten()
            .collect();
        let usernames = UserService::usernames(db, user_ids).await?;

        let mut comments_by_wall: HashMap<i64, Vec<CommentResponse>> = HashMap::new();
        for comment_model in comments {
            if let Some(wall_id) = comment_model.wall_id {
                comments_by_wall
                    .entry(wall_id)
                    .or_default()
                    .push(CommentResponse::from_model(comment_model, &usernames));
            }
        }

        Ok(walls
            .into_iter()
            .map(|w| {
                let counts = counts.get(&w.wall_id).copied().unwrap_or_default();
                let comments = comments_by_wall.remove(&w.wall_id).unwrap_or_default();
                WallResponse::from_model(w, counts, comments, &usernames)
            })
            .collect())
    }

    /// 제목 중복 확인 (수정 시 자기 자신은 제외)
    async fn ensure_title_available<C: ConnectionTrait>(
        db: &C,
        title: &str,
        exclude_wall_id: Option<i64>,
    ) -> Result<(), AppError> {
        let mut query = wall::Entity::find().filter(wall::Column::Title.eq(title));
        if let Some(wall_id) = exclude_wall_id {
            query = query.filter(wall::Column::WallId.ne(wall_id));
        }

        if query.count(db).await? > 0 {
            return Err(AppError::field_error("title", WALL_TITLE_TAKEN));
        }

        Ok(())
    }
}

/// 동시 요청으로 유니크 제약에 걸린 경우도 제목 중복 검증 에러로 응답
fn title_conflict(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::field_error("title", WALL_TITLE_TAKEN)
        }
        _ => err.into(),
    }
}
