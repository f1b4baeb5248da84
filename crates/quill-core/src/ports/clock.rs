//! Time and identifier sources, injected so tests can pin them.

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn millis(&self) -> i64;
}

/// Source of random, practically unique tokens.
pub trait UuidGenerator: Send + Sync {
    fn random(&self) -> String;
}
