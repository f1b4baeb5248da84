use std::sync::Arc;

use crate::ports::MailSender;

const SUBJECT: &str = "Please certify your email address";

/// Sends the email-ownership challenge to freshly registered users.
#[derive(Clone)]
pub struct CertificationService {
    mail: Arc<dyn MailSender>,
    base_url: String,
}

impl CertificationService {
    /// `base_url` is the public origin the verification link points at,
    /// e.g. `http://localhost:8080`.
    pub fn new(mail: Arc<dyn MailSender>, base_url: impl Into<String>) -> Self {
        Self {
            mail,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn send(&self, email: &str, user_id: i64, certification_code: &str) {
        let url = self.certification_url(user_id, certification_code);
        let body = format!(
            "Please click the following link to certify your email address: {url}"
        );
        self.mail.send(email, SUBJECT, &body).await;
    }

    fn certification_url(&self, user_id: i64, certification_code: &str) -> String {
        format!(
            "{}/api/users/{}/verify?certificationCode={}",
            self.base_url, user_id, certification_code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingMailSender;

    #[tokio::test]
    async fn sends_verification_link_to_the_user() {
        let mail = Arc::new(RecordingMailSender::new());
        let service = CertificationService::new(mail.clone(), "http://localhost:8080/");

        service
            .send(
                "kok202@example.com",
                1,
                "aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaab",
            )
            .await;

        let sent = mail.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "kok202@example.com");
        assert_eq!(sent[0].subject, "Please certify your email address");
        assert_eq!(
            sent[0].body,
            "Please click the following link to certify your email address: \
             http://localhost:8080/api/users/1/verify?certificationCode=aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaab"
        );
    }
}
