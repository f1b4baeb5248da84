use async_trait::async_trait;

use crate::domain::{Post, User, UserStatus};
use crate::error::RepoError;

/// Generic repository trait defining the operations every aggregate supports.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update). Entities without an ID get one assigned.
    async fn save(&self, entity: T) -> Result<T, RepoError>;
}

/// User repository with status-aware lookups.
#[async_trait]
pub trait UserRepository: BaseRepository<User, i64> {
    async fn find_by_id_and_status(
        &self,
        id: i64,
        status: UserStatus,
    ) -> Result<Option<User>, RepoError>;

    async fn find_by_email_and_status(
        &self,
        email: &str,
        status: UserStatus,
    ) -> Result<Option<User>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i64> {}
