//! SeaORM entities mirroring the `users` and `posts` tables.

pub mod post;
pub mod user;
