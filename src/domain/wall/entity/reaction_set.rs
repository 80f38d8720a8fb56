use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 반응 종류. 벽(wall)마다 종류별로 정확히 하나의 반응 집합이 존재합니다.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ReactionKind {
    #[sea_orm(string_value = "LIKE")]
    Like,
    #[sea_orm(string_value = "DISLIKE")]
    Dislike,
}

/// 벽의 좋아요/싫어요 집합 (벽 생성 시 함께 생성, 벽 삭제 시 함께 삭제)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reaction_set")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub reaction_set_id: i64,
    pub wall_id: i64,
    pub kind: ReactionKind,
    pub created_on: DateTime,
    pub modified_on: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::wall::Entity",
        from = "Column::WallId",
        to = "super::wall::Column::WallId",
        on_update = "NoAction",
        on_delete = "Cascade",
        fk_name = "fk_reaction_set_wall"
    )]
    Wall,
    #[sea_orm(has_many = "super::reaction::Entity")]
    Reaction,
}

impl Related<super::wall::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wall.def()
    }
}

impl Related<super::reaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reaction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
