//! Caller identification extractor.

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use std::future::{Ready, ready};

use super::error::AppError;

/// Header carrying the caller's email address.
pub const EMAIL_HEADER: &str = "EMAIL";

/// Email address of the calling user, taken from the `EMAIL` header.
///
/// Use this in handlers that act on "my" account:
/// ```ignore
/// async fn my_info(caller: CallerEmail) -> impl Responder {
///     format!("Hello, {}!", caller.0)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CallerEmail(pub String);

impl CallerEmail {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromRequest for CallerEmail {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let email = req
            .headers()
            .get(EMAIL_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty());

        match email {
            Some(email) => ready(Ok(CallerEmail(email.to_string()))),
            None => ready(Err(AppError::BadRequest(format!(
                "Missing or invalid {EMAIL_HEADER} header"
            )))),
        }
    }
}
