use serde::{Deserialize, Serialize};

use super::User;
use crate::ports::Clock;

/// Input for writing a new post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCreate {
    pub writer_id: i64,
    pub content: String,
}

/// Input for editing a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostUpdate {
    pub content: String,
}

/// Post entity - a piece of content written by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Option<i64>,
    pub content: String,
    /// Epoch milliseconds; fixed at creation.
    pub created_at: i64,
    /// Epoch milliseconds of the latest edit, `None` until the first one.
    pub modified_at: Option<i64>,
    /// Snapshot of the writer as loaded with the post.
    pub writer: User,
}

impl Post {
    /// Create a new, unsaved post.
    pub fn from_create(input: PostCreate, writer: User, clock: &dyn Clock) -> Self {
        Self {
            id: None,
            content: input.content,
            created_at: clock.millis(),
            modified_at: None,
            writer,
        }
    }

    /// Replace the content and stamp the modification time.
    pub fn update(&self, input: &PostUpdate, clock: &dyn Clock) -> Self {
        Self {
            content: input.content.clone(),
            modified_at: Some(clock.millis()),
            ..self.clone()
        }
    }
}
