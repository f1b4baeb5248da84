use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use quill_core::ports::MailSender;

use crate::pii::mask_email;

/// Configuration for the HTTP mail relay.
#[derive(Debug, Clone)]
pub struct HttpMailConfig {
    /// Endpoint accepting a JSON `{from, to, subject, body}` payload.
    pub relay_url: String,
    pub from: String,
}

#[derive(Serialize)]
struct OutgoingMail<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    body: &'a str,
}

/// Mail sender posting messages to an HTTP relay (transactional mail provider,
/// internal mail gateway, ...).
pub struct HttpMailSender {
    config: HttpMailConfig,
    client: reqwest::Client,
}

impl HttpMailSender {
    pub fn new(config: HttpMailConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { config, client }
    }
}

#[async_trait]
impl MailSender for HttpMailSender {
    async fn send(&self, to: &str, subject: &str, body: &str) {
        let payload = OutgoingMail {
            from: &self.config.from,
            to,
            subject,
            body,
        };

        let result = self
            .client
            .post(&self.config.relay_url)
            .json(&payload)
            .send()
            .await
            .and_then(|response| response.error_for_status());

        match result {
            Ok(_) => tracing::debug!(to = %mask_email(to), "Mail handed to relay"),
            Err(e) => tracing::warn!(
                to = %mask_email(to),
                error = %e,
                "Failed to deliver mail"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_serializes_all_fields() {
        let payload = OutgoingMail {
            from: "no-reply@quill.local",
            to: "kok202@example.com",
            subject: "Please certify your email address",
            body: "link",
        };

        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["from"], "no-reply@quill.local");
        assert_eq!(json["to"], "kok202@example.com");
        assert_eq!(json["subject"], "Please certify your email address");
        assert_eq!(json["body"], "link");
    }

    #[tokio::test]
    async fn unreachable_relay_does_not_fail_the_caller() {
        let sender = HttpMailSender::new(HttpMailConfig {
            // Port 9 (discard) on loopback: nothing listens there in CI.
            relay_url: "http://127.0.0.1:9/mail".to_string(),
            from: "no-reply@quill.local".to_string(),
        });

        sender
            .send("kok202@example.com", "subject", "body")
            .await;
    }
}
