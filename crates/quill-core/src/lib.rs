//! # Quill Core
//!
//! The domain layer of Quill: users, posts and the services that orchestrate them.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::DomainError;
