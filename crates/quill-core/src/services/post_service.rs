use std::sync::Arc;

use crate::domain::{Post, PostCreate, PostUpdate};
use crate::error::DomainError;
use crate::ports::{Clock, PostRepository, UserRepository};

#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl PostService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        users: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            posts,
            users,
            clock,
        }
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Posts", format!("id {id}")))
    }

    /// Write a post on behalf of `input.writer_id`, whatever the writer's status.
    pub async fn create(&self, input: PostCreate) -> Result<Post, DomainError> {
        let writer = self
            .users
            .find_by_id(input.writer_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Users", format!("id {}", input.writer_id)))?;

        let post = Post::from_create(input, writer, self.clock.as_ref());
        Ok(self.posts.save(post).await?)
    }

    pub async fn update(&self, id: i64, input: PostUpdate) -> Result<Post, DomainError> {
        let post = self.get_by_id(id).await?.update(&input, self.clock.as_ref());
        Ok(self.posts.save(post).await?)
    }
}
