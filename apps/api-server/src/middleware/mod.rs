//! Middleware, extractors and error mapping.

pub mod caller;
pub mod error;
