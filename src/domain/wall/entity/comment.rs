use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "comment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub comment_id: i64,
    pub wall_id: Option<i64>,
    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub comment_content: String,
    pub created_on: DateTime,
    pub modified_on: DateTime,
    pub created_by: Option<i64>,
    pub modified_by: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::wall::Entity",
        from = "Column::WallId",
        to = "super::wall::Column::WallId",
        on_update = "NoAction",
        on_delete = "Cascade",
        fk_name = "fk_comment_wall"
    )]
    Wall,
    #[sea_orm(
        belongs_to = "crate::domain::user::entity::user::Entity",
        from = "Column::CreatedBy",
        to = "crate::domain::user::entity::user::Column::UserId",
        on_update = "NoAction",
        on_delete = "Cascade",
        fk_name = "fk_comment_created_by"
    )]
    Creator,
    #[sea_orm(
        belongs_to = "crate::domain::user::entity::user::Entity",
        from = "Column::ModifiedBy",
        to = "crate::domain::user::entity::user::Column::UserId",
        on_update = "NoAction",
        on_delete = "Cascade",
        fk_name = "fk_comment_modified_by"
    )]
    Modifier,
}

impl Related<super::wall::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wall.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
