use async_trait::async_trait;

use quill_core::ports::MailSender;

use crate::pii::mask_email;

/// Mail sender that only writes the message to the log.
///
/// This is the fallback when no mail relay is configured. The body is logged at
/// DEBUG so the verification link stays reachable during local development.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMailSender;

#[async_trait]
impl MailSender for LogMailSender {
    async fn send(&self, to: &str, subject: &str, body: &str) {
        tracing::info!(to = %mask_email(to), subject, "Mail relay not configured - logging mail");
        tracing::debug!(body, "Mail body");
    }
}
