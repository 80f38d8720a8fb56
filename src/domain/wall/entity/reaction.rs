use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 반응 집합 멤버십
///
/// (wall_id, user_id) 유니크 인덱스로 한 사용자가 같은 벽의 좋아요/싫어요 집합에
/// 동시에 속할 수 없습니다.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reaction")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub reaction_id: i64,
    pub reaction_set_id: i64,
    pub wall_id: i64,
    pub user_id: i64,
    pub created_on: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::reaction_set::Entity",
        from = "Column::ReactionSetId",
        to = "super::reaction_set::Column::ReactionSetId",
        on_update = "NoAction",
        on_delete = "Cascade",
        fk_name = "fk_reaction_reaction_set"
    )]
    ReactionSet,
    #[sea_orm(
        belongs_to = "super::wall::Entity",
        from = "Column::WallId",
        to = "super::wall::Column::WallId",
        on_update = "NoAction",
        on_delete = "Cascade",
        fk_name = "fk_reaction_wall"
    )]
    Wall,
    #[sea_orm(
        belongs_to = "crate::domain::user::entity::user::Entity",
        from = "Column::UserId",
        to = "crate::domain::user::entity::user::Column::UserId",
        on_update = "NoAction",
        on_delete = "Cascade",
        fk_name = "fk_reaction_user"
    )]
    User,
}

impl Related<super::reaction_set::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReactionSet.def()
    }
}

impl Related<super::wall::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wall.def()
    }
}

impl Related<crate::domain::user::entity::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
