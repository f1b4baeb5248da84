//! Domain entities - the core business objects.

mod user;

mod post;

pub use post::{Post, PostCreate, PostUpdate};
pub use user::{User, UserCreate, UserStatus, UserUpdate};
