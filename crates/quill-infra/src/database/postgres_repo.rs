//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, QueryFilter, TryIntoModel};

use quill_core::domain::{Post, User, UserStatus};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::{PostgresBaseRepository, query_error, write_error};
use crate::pii::mask_email;

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id_and_status(
        &self,
        id: i64,
        status: UserStatus,
    ) -> Result<Option<User>, RepoError> {
        let result = UserEntity::find()
            .filter(user::Column::Id.eq(id))
            .filter(user::Column::Status.eq(user::Status::from(status)))
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_email_and_status(
        &self,
        email: &str,
        status: UserStatus,
    ) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), %status, "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .filter(user::Column::Status.eq(user::Status::from(status)))
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }
}

/// PostgreSQL post repository.
///
/// Posts are returned with their writer, loaded by a second query.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BaseRepository<Post, i64> for PostgresPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let Some(model) = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_error)?
        else {
            return Ok(None);
        };

        let writer = UserEntity::find_by_id(model.writer_id)
            .one(&self.db)
            .await
            .map_err(query_error)?
            .ok_or_else(|| {
                tracing::error!(post_id = id, writer_id = model.writer_id, "Post writer is missing");
                RepoError::Constraint(format!("post {id} references a missing writer"))
            })?;

        Ok(Some(model.into_domain(writer)))
    }

    async fn save(&self, entity: Post) -> Result<Post, RepoError> {
        let writer_id = entity.writer.id.ok_or_else(|| {
            RepoError::Constraint("writer must be saved before the post".to_string())
        })?;

        let saved = post::active_model(&entity, writer_id)
            .save(&self.db)
            .await
            .map_err(write_error)?
            .try_into_model()
            .map_err(query_error)?;

        Ok(Post {
            id: Some(saved.id),
            ..entity
        })
    }
}

impl PostRepository for PostgresPostRepository {}
