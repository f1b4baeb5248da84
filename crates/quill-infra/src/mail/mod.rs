//! Mail senders - a log-only sender for development and an HTTP relay sender.

mod logger;

#[cfg(feature = "http-mail")]
mod http;

pub use logger::LogMailSender;

#[cfg(feature = "http-mail")]
pub use http::{HttpMailConfig, HttpMailSender};
