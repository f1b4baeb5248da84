//! Deterministic stand-ins for the clock, uuid and mail ports.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::{Clock, MailSender, UuidGenerator};

/// Clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl FixedClock {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }
}

impl Clock for FixedClock {
    fn millis(&self) -> i64 {
        self.0
    }
}

/// Generator that always hands out the same token.
#[derive(Debug, Clone)]
pub struct FixedUuidGenerator(pub String);

impl FixedUuidGenerator {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl UuidGenerator for FixedUuidGenerator {
    fn random(&self) -> String {
        self.0.clone()
    }
}

/// A mail captured by [`RecordingMailSender`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Mail sender that keeps every message in memory.
#[derive(Debug, Default)]
pub struct RecordingMailSender {
    sent: Mutex<Vec<SentMail>>,
}

impl RecordingMailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl MailSender for RecordingMailSender {
    async fn send(&self, to: &str, subject: &str, body: &str) {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(SentMail {
                to: to.to_string(),
                subject: subject.to_string(),
                body: body.to_string(),
            });
        }
    }
}
