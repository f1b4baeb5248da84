use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::Post;
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository, UserRepository};

use super::Sequence;

/// Stored form of a post: the writer is kept by id, like the `posts` table.
#[derive(Debug, Clone)]
struct PostRow {
    content: String,
    created_at: i64,
    modified_at: Option<i64>,
    writer_id: i64,
}

/// Post repository resolving each post's writer from the user repository on read.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<i64, PostRow>>,
    ids: Sequence,
    users: Arc<dyn UserRepository>,
}

impl InMemoryPostRepository {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self {
            store: RwLock::default(),
            ids: Sequence::default(),
            users,
        }
    }
}

#[async_trait]
impl BaseRepository<Post, i64> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let Some(row) = self.store.read().await.get(&id).cloned() else {
            return Ok(None);
        };

        let writer = self.users.find_by_id(row.writer_id).await?.ok_or_else(|| {
            tracing::error!(post_id = id, writer_id = row.writer_id, "Post writer is missing");
            RepoError::Constraint(format!("post {id} references a missing writer"))
        })?;

        Ok(Some(Post {
            id: Some(id),
            content: row.content,
            created_at: row.created_at,
            modified_at: row.modified_at,
            writer,
        }))
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let writer_id = post.writer.id.ok_or_else(|| {
            RepoError::Constraint("writer must be saved before the post".to_string())
        })?;

        let id = match post.id {
            Some(id) => {
                self.ids.observe(id);
                id
            }
            None => self.ids.next(),
        };

        self.store.write().await.insert(
            id,
            PostRow {
                content: post.content.clone(),
                created_at: post.created_at,
                modified_at: post.modified_at,
                writer_id,
            },
        );

        Ok(Post {
            id: Some(id),
            ..post
        })
    }
}

impl PostRepository for InMemoryPostRepository {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryUserRepository;
    use quill_core::domain::{User, UserStatus};

    fn writer() -> User {
        User {
            id: Some(1),
            email: "kok202@example.com".to_string(),
            nickname: "kok202".to_string(),
            address: "Seoul".to_string(),
            certification_code: "aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa".to_string(),
            status: UserStatus::Pending,
            last_login_at: None,
        }
    }

    fn post(id: Option<i64>, content: &str) -> Post {
        Post {
            id,
            content: content.to_string(),
            created_at: 100,
            modified_at: None,
            writer: writer(),
        }
    }

    async fn repos() -> (InMemoryPostRepository, Arc<InMemoryUserRepository>) {
        let users = Arc::new(InMemoryUserRepository::new());
        users.save(writer()).await.unwrap();
        (InMemoryPostRepository::new(users.clone()), users)
    }

    #[tokio::test]
    async fn save_then_find() {
        let (repo, _) = repos().await;

        let saved = repo.save(post(None, "hello")).await.unwrap();
        let found = repo.find_by_id(1).await.unwrap();

        assert_eq!(saved.id, Some(1));
        assert_eq!(found, Some(saved));
        assert!(repo.find_by_id(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_with_id_overwrites() {
        let (repo, _) = repos().await;
        repo.save(post(Some(1), "hello")).await.unwrap();

        repo.save(post(Some(1), "hello world")).await.unwrap();

        let found = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(found.content, "hello world");
    }

    #[tokio::test]
    async fn find_reflects_current_writer() {
        let (repo, users) = repos().await;
        repo.save(post(None, "hello")).await.unwrap();

        users
            .save(User {
                nickname: "renamed".to_string(),
                status: UserStatus::Active,
                ..writer()
            })
            .await
            .unwrap();

        let found = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(found.writer.nickname, "renamed");
        assert_eq!(found.writer.status, UserStatus::Active);
    }

    #[tokio::test]
    async fn save_requires_saved_writer() {
        let (repo, _) = repos().await;

        let result = repo
            .save(Post {
                writer: User {
                    id: None,
                    ..writer()
                },
                ..post(None, "hello")
            })
            .await;

        assert!(matches!(result, Err(RepoError::Constraint(_))));
    }

    #[tokio::test]
    async fn missing_writer_is_reported() {
        let users = Arc::new(InMemoryUserRepository::new());
        let repo = InMemoryPostRepository::new(users);
        repo.save(post(None, "hello")).await.unwrap();

        let result = repo.find_by_id(1).await;

        assert!(matches!(result, Err(RepoError::Constraint(_))));
    }
}
