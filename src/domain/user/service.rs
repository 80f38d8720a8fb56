use std::collections::HashMap;

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QuerySelect};

use crate::domain::user::entity::user;
use crate::utils::error::AppError;

pub struct UserService;

impl UserService {
    /// 사용자 ID 목록으로 username 매핑 조회 (직렬화 시 created_by/modified_by 표시용)
    pub async fn usernames<C, I>(db: &C, user_ids: I) -> Result<HashMap<i64, String>, AppError>
    where
        C: ConnectionTrait,
        I: IntoIterator<Item = i64>,
    {
        let mut ids: Vec<i64> = user_ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i64, String)> = user::Entity::find()
            .filter(user::Column::UserId.is_in(ids))
            .select_only()
            .column(user::Column::UserId)
            .column(user::Column::Username)
            .into_tuple()
            .all(db)
            .await?;

        Ok(rows.into_iter().collect())
    }
}
