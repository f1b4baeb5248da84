//! Outgoing mail port.

use async_trait::async_trait;

/// Mail delivery.
///
/// Delivery is best-effort: implementations report their own failures and
/// never surface them to the caller.
#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str);
}
