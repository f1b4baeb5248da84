//! In-memory repositories - used when no database is configured and in tests.
//!
//! Data is lost on process restart.

mod post;
mod user;

use std::sync::atomic::{AtomicI64, Ordering};

pub use post::InMemoryPostRepository;
pub use user::InMemoryUserRepository;

/// Monotonic id source mimicking a database sequence.
#[derive(Debug, Default)]
struct Sequence {
    last: AtomicI64,
}

impl Sequence {
    fn next(&self) -> i64 {
        self.last.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Keep the sequence ahead of ids that were assigned by the caller.
    fn observe(&self, id: i64) {
        self.last.fetch_max(id, Ordering::SeqCst);
    }
}
