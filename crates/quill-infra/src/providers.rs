//! Production time and uuid sources.

use quill_core::ports::{Clock, UuidGenerator};

/// Wall clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Random v4 UUIDs rendered in hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomUuidGenerator;

impl UuidGenerator for RandomUuidGenerator {
    fn random(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}
