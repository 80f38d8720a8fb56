use std::collections::HashMap;

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QuerySelect, Set, TransactionTrait,
};
use tracing::info;

use super::state::ReactionState;
use crate::domain::wall::entity::reaction_set::ReactionKind;
use crate::domain::wall::entity::{reaction, reaction_set, wall};
use crate::domain::wall::service::WALL_DOES_NOT_EXIST;
use crate::state::AppState;
use crate::utils::error::AppError;

pub struct ReactionService;

impl ReactionService {
    /// 좋아요/싫어요 토글
    ///
    /// 현재 멤버십 조회, 다음 상태 계산, 기록을 하나의 트랜잭션에서 수행합니다.
    /// 첫 문장을 쓰기로 시작해 쓰기 잠금을 먼저 잡습니다 (SQLite는 쓰기 잠금, MySQL은 행 잠금).
    /// 같은 벽에 대한 동시 토글은 이 잠금에서 대기합니다.
    pub async fn toggle(
        state: &AppState,
        wall_id: i64,
        user_id: i64,
        action: ReactionKind,
    ) -> Result<ReactionState, AppError> {
        let now = Utc::now().naive_utc();

        // 1. 트랜잭션 시작
        let txn = state.db.begin().await?;

        // 2. 반응 집합 갱신으로 쓰기 잠금 선점
        reaction_set::Entity::update_many()
            .col_expr(reaction_set::Column::ModifiedOn, Expr::value(now))
            .filter(reaction_set::Column::WallId.eq(wall_id))
            .exec(&txn)
            .await?;

        // 벽 존재 확인
        wall::Entity::find_by_id(wall_id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::WallNotFound(WALL_DOES_NOT_EXIST.to_string()))?;

        // 3. 벽의 반응 집합 (종류 → 집합 ID)
        let sets: HashMap<ReactionKind, i64> = reaction_set::Entity::find()
            .filter(reaction_set::Column::WallId.eq(wall_id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|set| (set.kind, set.reaction_set_id))
            .collect();

        // 4. 현재 멤버십
        let existing = reaction::Entity::find()
            .filter(reaction::Column::WallId.eq(wall_id))
            .filter(reaction::Column::UserId.eq(user_id))
            .one(&txn)
            .await?;

        let current_kind = existing.as_ref().and_then(|row| {
            sets.iter()
                .find(|(_, set_id)| **set_id == row.reaction_set_id)
                .map(|(kind, _)| *kind)
        });
        let current = ReactionState::from_membership(current_kind);
        let next = current.toggle(action);

        // 5. 다음 상태 기록
        match (existing, next.membership()) {
            (Some(row), None) => {
                reaction::Entity::delete_by_id(row.reaction_id)
                    .exec(&txn)
                    .await?;
            }
            (Some(row), Some(kind)) => {
                let set_id = Self::set_id(&sets, wall_id, kind)?;
                let mut active: reaction::ActiveModel = row.into();
                active.reaction_set_id = Set(set_id);
                active.update(&txn).await?;
            }
            (None, Some(kind)) => {
                let set_id = Self::set_id(&sets, wall_id, kind)?;
                reaction::ActiveModel {
                    reaction_set_id: Set(set_id),
                    wall_id: Set(wall_id),
                    user_id: Set(user_id),
                    created_on: Set(now),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;
            }
            (None, None) => {}
        }

        // 6. 트랜잭션 커밋
        txn.commit().await?;

        info!(
            wall_id = wall_id,
            user_id = user_id,
            action = ?action,
            from = ?current,
            to = ?next,
            "반응 토글 완료"
        );

        Ok(next)
    }

    fn set_id(
        sets: &HashMap<ReactionKind, i64>,
        wall_id: i64,
        kind: ReactionKind,
    ) -> Result<i64, AppError> {
        sets.get(&kind).copied().ok_or_else(|| {
            AppError::InternalError(format!(
                "reaction set {:?} missing for wall {}",
                kind, wall_id
            ))
        })
    }
}
