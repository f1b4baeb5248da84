use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::{User, UserStatus};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, UserRepository};

use super::Sequence;

/// User repository backed by a `HashMap` behind an async `RwLock`.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    store: RwLock<HashMap<i64, User>>,
    ids: Sequence,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<User, i64> for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        let id = match user.id {
            Some(id) => {
                self.ids.observe(id);
                id
            }
            None => self.ids.next(),
        };
        let user = User {
            id: Some(id),
            ..user
        };

        let mut store = self.store.write().await;
        if store
            .values()
            .any(|existing| existing.id != user.id && existing.email == user.email)
        {
            return Err(RepoError::Constraint(
                "Entity already exists".to_string(),
            ));
        }
        store.insert(id, user.clone());

        Ok(user)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id_and_status(
        &self,
        id: i64,
        status: UserStatus,
    ) -> Result<Option<User>, RepoError> {
        Ok(self
            .store
            .read()
            .await
            .get(&id)
            .filter(|user| user.status == status)
            .cloned())
    }

    async fn find_by_email_and_status(
        &self,
        email: &str,
        status: UserStatus,
    ) -> Result<Option<User>, RepoError> {
        Ok(self
            .store
            .read()
            .await
            .values()
            .find(|user| user.email == email && user.status == status)
            .cloned())
    }
}
