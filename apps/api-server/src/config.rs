//! Application configuration loaded from environment variables.

use std::env;

use quill_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub mail: MailConfig,
    /// Public origin used to build the verification link mailed to new users.
    pub public_base_url: String,
    /// Where the browser lands after a successful email verification.
    pub verify_redirect_url: String,
}

/// Outgoing mail settings.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// HTTP relay endpoint; mail is only logged when unset.
    pub relay_url: Option<String>,
    pub from: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let database = var("DATABASE_URL").map(|url| DatabaseConfig {
            url,
            max_connections: var("DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: var("DB_MIN_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        let mail = MailConfig {
            relay_url: var("MAIL_RELAY_URL").filter(|s| !s.is_empty()),
            from: var("MAIL_FROM").unwrap_or_else(|| "no-reply@quill.local".to_string()),
        };

        Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            database,
            mail,
            public_base_url: var("PUBLIC_BASE_URL")
                .unwrap_or_else(|| "http://localhost:8080".to_string()),
            verify_redirect_url: var("VERIFY_REDIRECT_URL")
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config(&[]);

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.database.is_none());
        assert!(config.mail.relay_url.is_none());
        assert_eq!(config.mail.from, "no-reply@quill.local");
        assert_eq!(config.public_base_url, "http://localhost:8080");
        assert_eq!(config.verify_redirect_url, "http://localhost:3000");
    }

    #[test]
    fn database_settings_follow_database_url() {
        let config = config(&[
            ("DATABASE_URL", "postgres://localhost/quill"),
            ("DB_MAX_CONNECTIONS", "20"),
            ("DB_MIN_CONNECTIONS", "not-a-number"),
        ]);

        let db = config.database.expect("database configured");
        assert_eq!(db.url, "postgres://localhost/quill");
        assert_eq!(db.max_connections, 20);
        assert_eq!(db.min_connections, 10);
    }

    #[test]
    fn invalid_port_falls_back_and_blank_relay_is_ignored() {
        let config = config(&[("PORT", "http"), ("MAIL_RELAY_URL", "")]);

        assert_eq!(config.port, 8080);
        assert!(config.mail.relay_url.is_none());
    }
}
