//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::{Clock, MailSender, PostRepository, UserRepository, UuidGenerator};
use quill_core::services::{CertificationService, PostService, UserService};
use quill_infra::{
    InMemoryPostRepository, InMemoryUserRepository, LogMailSender, RandomUuidGenerator,
    SystemClock,
};

#[cfg(feature = "postgres")]
use quill_infra::database::{DatabaseConnections, PostgresPostRepository, PostgresUserRepository};
#[cfg(feature = "http-mail")]
use quill_infra::mail::{HttpMailConfig, HttpMailSender};

use crate::config::{AppConfig, MailConfig};

/// Persistence backend chosen at startup.
#[derive(Clone)]
pub enum Storage {
    InMemory,
    #[cfg(feature = "postgres")]
    Postgres(Arc<DatabaseConnections>),
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub posts: PostService,
    pub storage: Storage,
    pub verify_redirect_url: String,
}

/// Collaborators the services are wired from.
pub struct Components {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub mail: Arc<dyn MailSender>,
    pub clock: Arc<dyn Clock>,
    pub uuid: Arc<dyn UuidGenerator>,
    pub storage: Storage,
}

impl Components {
    /// In-memory repositories with the system clock and random uuids.
    pub fn in_memory(mail: Arc<dyn MailSender>) -> Self {
        let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        Self {
            posts: Arc::new(InMemoryPostRepository::new(users.clone())),
            users,
            mail,
            clock: Arc::new(SystemClock),
            uuid: Arc::new(RandomUuidGenerator),
            storage: Storage::InMemory,
        }
    }
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let mail = build_mail_sender(&config.mail);
        let components = Components::in_memory(mail);

        #[cfg(feature = "postgres")]
        let components = match &config.database {
            Some(db_config) => match DatabaseConnections::init(db_config).await {
                Ok(connections) => {
                    let conn = Arc::new(connections);
                    Components {
                        users: Arc::new(PostgresUserRepository::new(conn.main.clone())),
                        posts: Arc::new(PostgresPostRepository::new(conn.main.clone())),
                        storage: Storage::Postgres(conn),
                        ..components
                    }
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    components
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                components
            }
        };

        #[cfg(not(feature = "postgres"))]
        tracing::info!("Running without postgres feature - using in-memory repositories");

        let state = Self::assemble(components, config);
        tracing::info!("Application state initialized");
        state
    }

    /// Wire the services from already-built collaborators.
    pub fn assemble(components: Components, config: &AppConfig) -> Self {
        let certification =
            CertificationService::new(components.mail, config.public_base_url.clone());

        Self {
            users: UserService::new(
                components.users.clone(),
                certification,
                components.clock.clone(),
                components.uuid,
            ),
            posts: PostService::new(components.posts, components.users, components.clock),
            storage: components.storage,
            verify_redirect_url: config.verify_redirect_url.clone(),
        }
    }
}

fn build_mail_sender(config: &MailConfig) -> Arc<dyn MailSender> {
    #[cfg(feature = "http-mail")]
    if let Some(relay_url) = &config.relay_url {
        tracing::info!("Mail relay configured");
        return Arc::new(HttpMailSender::new(HttpMailConfig {
            relay_url: relay_url.clone(),
            from: config.from.clone(),
        }));
    }

    if config.relay_url.is_some() {
        tracing::warn!("MAIL_RELAY_URL set but http-mail feature is disabled; logging mail only");
    }
    Arc::new(LogMailSender)
}
