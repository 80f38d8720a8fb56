use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 외부 인증 서비스가 관리하는 사용자
///
/// 이 서비스는 사용자 이름 표시와 외래 키 용도로만 행을 읽습니다.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i64,
    #[sea_orm(column_type = "String(StringLen::N(150))", unique)]
    pub username: String,
    pub email: String,
    pub created_on: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::domain::wall::entity::reaction::Entity")]
    Reaction,
}

impl Related<crate::domain::wall::entity::reaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reaction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
