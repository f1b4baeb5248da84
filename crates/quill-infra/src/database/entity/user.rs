//! User entity for SeaORM.

use quill_core::domain::UserStatus;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub email: String,
    pub nickname: String,
    pub address: String,
    pub certification_code: String,
    pub status: Status,
    pub last_login_at: Option<i64>,
}

/// Column representation of [`UserStatus`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Status {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "RESIGNED")]
    Resigned,
}

impl From<UserStatus> for Status {
    fn from(status: UserStatus) -> Self {
        match status {
            UserStatus::Pending => Status::Pending,
            UserStatus::Active => Status::Active,
            UserStatus::Resigned => Status::Resigned,
        }
    }
}

impl From<Status> for UserStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::Pending => UserStatus::Pending,
            Status::Active => UserStatus::Active,
            Status::Resigned => UserStatus::Resigned,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain User.
impl From<Model> for quill_core::domain::User {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            email: model.email,
            nickname: model.nickname,
            address: model.address,
            certification_code: model.certification_code,
            status: model.status.into(),
            last_login_at: model.last_login_at,
        }
    }
}

/// Conversion from Domain User to SeaORM ActiveModel.
///
/// An unsaved user leaves the id unset so the database assigns it.
impl From<quill_core::domain::User> for ActiveModel {
    fn from(user: quill_core::domain::User) -> Self {
        Self {
            id: user.id.map_or(NotSet, Set),
            email: Set(user.email),
            nickname: Set(user.nickname),
            address: Set(user.address),
            certification_code: Set(user.certification_code),
            status: Set(user.status.into()),
            last_login_at: Set(user.last_login_at),
        }
    }
}
