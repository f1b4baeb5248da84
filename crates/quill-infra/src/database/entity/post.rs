//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: i64,
    pub modified_at: Option<i64>,
    pub writer_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::WriterId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Assemble the domain post from this row and its writer's row.
    pub fn into_domain(self, writer: super::user::Model) -> quill_core::domain::Post {
        quill_core::domain::Post {
            id: Some(self.id),
            content: self.content,
            created_at: self.created_at,
            modified_at: self.modified_at,
            writer: writer.into(),
        }
    }
}

/// Build the ActiveModel for a domain post whose writer is `writer_id`.
pub fn active_model(post: &quill_core::domain::Post, writer_id: i64) -> ActiveModel {
    ActiveModel {
        id: post.id.map_or(NotSet, Set),
        content: Set(post.content.clone()),
        created_at: Set(post.created_at),
        modified_at: Set(post.modified_at),
        writer_id: Set(writer_id),
    }
}
