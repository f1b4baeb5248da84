//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate contains the repositories, time/uuid providers and mail senders.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL database support via SeaORM
//! - `http-mail` - Certification mail delivered through an HTTP relay

pub mod database;
pub mod mail;
pub mod memory;
pub mod providers;

mod pii;

// Re-exports - In-Memory
pub use mail::LogMailSender;
pub use memory::{InMemoryPostRepository, InMemoryUserRepository};
pub use providers::{RandomUuidGenerator, SystemClock};

#[cfg(feature = "http-mail")]
pub use mail::HttpMailSender;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresPostRepository, PostgresUserRepository};
