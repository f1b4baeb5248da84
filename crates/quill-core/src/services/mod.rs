//! Application services - orchestrate entities, repositories and outgoing mail.

mod certification;
mod post_service;
mod user_service;

pub use certification::CertificationService;
pub use post_service::PostService;
pub use user_service::UserService;
