use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "wall")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub wall_id: i64,
    #[sea_orm(column_type = "String(StringLen::N(50))", unique)]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_on: DateTime,
    pub modified_on: DateTime,
    pub created_by: Option<i64>,
    pub modified_by: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::domain::user::entity::user::Entity",
        from = "Column::CreatedBy",
        to = "crate::domain::user::entity::user::Column::UserId",
        on_update = "NoAction",
        on_delete = "Cascade",
        fk_name = "fk_wall_created_by"
    )]
    Creator,
    #[sea_orm(
        belongs_to = "crate::domain::user::entity::user::Entity",
        from = "Column::ModifiedBy",
        to = "crate::domain::user::entity::user::Column::UserId",
        on_update = "NoAction",
        on_delete = "Cascade",
        fk_name = "fk_wall_modified_by"
    )]
    Modifier,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::reaction_set::Entity")]
    ReactionSet,
    #[sea_orm(has_many = "super::reaction::Entity")]
    Reaction,
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::reaction_set::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReactionSet.def()
    }
}

impl Related<super::reaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reaction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
