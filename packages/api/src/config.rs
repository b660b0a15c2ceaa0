#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    pub fn from_env() -> Self {
        Self::from_value(&std::env::var("APP_MODE").unwrap_or_default())
    }

    pub fn from_value(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }
}

#[cfg(feature = "server")]
pub use server::*;

#[cfg(feature = "server")]
mod server {
    use super::AppMode;
    use anyhow::{bail, Context, Result};

    const LOCAL_DB_PATH: &str = ".dev/local.db";
    const LOCAL_UPLOADS_PATH: &str = ".dev/uploads";
    const LOCAL_JWT_SECRET: &str = "local-dev-secret-not-for-production-use";
    const LOCAL_ADMIN_USERNAME: &str = "admin";
    const LOCAL_ADMIN_PASSWORD: &str = "ChangeMe123";
    const MIN_JWT_SECRET_LEN: usize = 32;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum DatabaseConfig {
        PostgreSQL { url: String },
        SQLite { path: String },
    }

    #[derive(Clone, PartialEq, Eq)]
    pub enum EmailConfig {
        SMTP {
            host: String,
            port: u16,
            username: String,
            password: String,
            from_email: String,
            from_name: String,
        },
        Console,
    }

    impl std::fmt::Debug for EmailConfig {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                EmailConfig::SMTP { host, port, .. } => f
                    .debug_struct("SMTP")
                    .field("host", host)
                    .field("port", port)
                    .finish_non_exhaustive(),
                EmailConfig::Console => f.write_str("Console"),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum StorageConfig {
        Filesystem { base_path: String, serve_url: String },
    }

    /// Credentials for the admin account created on an empty `admins` table.
    #[derive(Clone, PartialEq, Eq)]
    pub struct AdminBootstrap {
        pub username: String,
        pub password: String,
    }

    impl std::fmt::Debug for AdminBootstrap {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("AdminBootstrap")
                .field("username", &self.username)
                .finish_non_exhaustive()
        }
    }

    #[derive(Clone)]
    pub struct AppConfig {
        pub mode: AppMode,
        pub database: DatabaseConfig,
        pub email: EmailConfig,
        pub storage: StorageConfig,
        pub jwt_secret: String,
        pub app_base_url: String,
        pub admin: Option<AdminBootstrap>,
        /// Where contact-form notifications go; `None` disables them.
        pub contact_inbox: Option<String>,
    }

    impl std::fmt::Debug for AppConfig {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("AppConfig")
                .field("mode", &self.mode)
                .field("database", &redact_database(&self.database))
                .field("email", &self.email)
                .field("storage", &self.storage)
                .field("app_base_url", &self.app_base_url)
                .field("admin", &self.admin)
                .field("contact_inbox", &self.contact_inbox)
                .finish_non_exhaustive()
        }
    }

    impl AppConfig {
        /// Read configuration from the process environment (and `.env`).
        pub fn from_env() -> Result<Self> {
            let _ = dotenvy::dotenv();
            Self::from_lookup(AppMode::from_env(), |key| std::env::var(key).ok())
        }

        /// Build configuration for `mode` from an arbitrary key lookup.
        pub fn from_lookup(mode: AppMode, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
            let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

            let database = match mode {
                AppMode::Local => match var("DATABASE_URL") {
                    Some(url) if url.starts_with("postgres") => DatabaseConfig::PostgreSQL { url },
                    _ => DatabaseConfig::SQLite {
                        path: var("DATABASE_PATH").unwrap_or_else(|| LOCAL_DB_PATH.to_string()),
                    },
                },
                AppMode::Production => DatabaseConfig::PostgreSQL {
                    url: var("DATABASE_URL")
                        .context("DATABASE_URL must be set in production mode")?,
                },
            };

            let jwt_secret = match (mode, var("JWT_SECRET")) {
                (_, Some(secret)) => secret,
                (AppMode::Local, None) => LOCAL_JWT_SECRET.to_string(),
                (AppMode::Production, None) => bail!("JWT_SECRET must be set in production mode"),
            };
            if mode == AppMode::Production && jwt_secret.len() < MIN_JWT_SECRET_LEN {
                bail!("JWT_SECRET must be at least {MIN_JWT_SECRET_LEN} characters");
            }

            let email = match var("SMTP_HOST") {
                Some(host) => EmailConfig::SMTP {
                    host,
                    port: match var("SMTP_PORT") {
                        Some(port) => port.parse().context("SMTP_PORT must be a port number")?,
                        None => 587,
                    },
                    username: var("SMTP_USERNAME").context("SMTP_USERNAME must be set")?,
                    password: var("SMTP_PASSWORD").context("SMTP_PASSWORD must be set")?,
                    from_email: var("SMTP_FROM_EMAIL").context("SMTP_FROM_EMAIL must be set")?,
                    from_name: var("SMTP_FROM_NAME")
                        .unwrap_or_else(|| "Holy Family Shrine".to_string()),
                },
                None => EmailConfig::Console,
            };

            let storage = StorageConfig::Filesystem {
                base_path: var("UPLOADS_DIR").unwrap_or_else(|| match mode {
                    AppMode::Local => LOCAL_UPLOADS_PATH.to_string(),
                    AppMode::Production => "uploads".to_string(),
                }),
                serve_url: var("UPLOADS_URL").unwrap_or_else(|| "/uploads".to_string()),
            };

            let admin = match (var("ADMIN_USERNAME"), var("ADMIN_PASSWORD"), mode) {
                (Some(username), Some(password), _) => Some(AdminBootstrap { username, password }),
                (None, None, AppMode::Local) => Some(AdminBootstrap {
                    username: LOCAL_ADMIN_USERNAME.to_string(),
                    password: LOCAL_ADMIN_PASSWORD.to_string(),
                }),
                (None, None, AppMode::Production) => None,
                _ => bail!("ADMIN_USERNAME and ADMIN_PASSWORD must be set together"),
            };

            Ok(Self {
                mode,
                database,
                email,
                storage,
                jwt_secret,
                app_base_url: var("APP_BASE_URL")
                    .unwrap_or_else(|| "http://localhost:8080".to_string()),
                admin,
                contact_inbox: var("CONTACT_INBOX"),
            })
        }
    }

    fn redact_database(database: &DatabaseConfig) -> DatabaseConfig {
        match database {
            DatabaseConfig::PostgreSQL { url } => DatabaseConfig::PostgreSQL {
                url: redact_db_url(url),
            },
            other => other.clone(),
        }
    }

    /// Hide the password part of a connection URL for logging.
    pub fn redact_db_url(value: &str) -> String {
        if let Some((prefix, rest)) = value.split_once("://") {
            if let Some((creds, host)) = rest.split_once('@') {
                let user = creds.split(':').next().unwrap_or("user");
                return format!("{prefix}://{user}:***@{host}");
            }
            return value.to_string();
        }

        "<invalid DATABASE_URL>".to_string()
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::collections::HashMap;

        fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
            let map: HashMap<String, String> = pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            move |key: &str| map.get(key).cloned()
        }

        #[test]
        fn local_mode_needs_no_environment() {
            let cfg = AppConfig::from_lookup(AppMode::Local, lookup(&[])).unwrap();
            assert_eq!(
                cfg.database,
                DatabaseConfig::SQLite {
                    path: LOCAL_DB_PATH.to_string()
                }
            );
            assert_eq!(cfg.email, EmailConfig::Console);
            assert_eq!(cfg.admin.as_ref().map(|a| a.username.as_str()), Some("admin"));
            assert_eq!(cfg.contact_inbox, None);
        }

        #[test]
        fn production_requires_database_url() {
            let err = AppConfig::from_lookup(
                AppMode::Production,
                lookup(&[("JWT_SECRET", "0123456789abcdef0123456789abcdef")]),
            )
            .unwrap_err();
            assert!(err.to_string().contains("DATABASE_URL"));
        }

        #[test]
        fn production_rejects_short_jwt_secret() {
            let err = AppConfig::from_lookup(
                AppMode::Production,
                lookup(&[
                    ("DATABASE_URL", "postgres://u:p@db/shrine"),
                    ("JWT_SECRET", "short"),
                ]),
            )
            .unwrap_err();
            assert!(err.to_string().contains("JWT_SECRET"));
        }

        #[test]
        fn production_reads_smtp_and_admin() {
            let cfg = AppConfig::from_lookup(
                AppMode::Production,
                lookup(&[
                    ("DATABASE_URL", "postgres://u:p@db/shrine"),
                    ("JWT_SECRET", "0123456789abcdef0123456789abcdef"),
                    ("SMTP_HOST", "smtp.example.org"),
                    ("SMTP_USERNAME", "mailer"),
                    ("SMTP_PASSWORD", "pw"),
                    ("SMTP_FROM_EMAIL", "office@example.org"),
                    ("ADMIN_USERNAME", "rector"),
                    ("ADMIN_PASSWORD", "Str0ngPassword"),
                    ("CONTACT_INBOX", "office@example.org"),
                ]),
            )
            .unwrap();
            assert!(matches!(cfg.email, EmailConfig::SMTP { port: 587, .. }));
            assert_eq!(cfg.admin.unwrap().username, "rector");
            assert_eq!(cfg.contact_inbox.as_deref(), Some("office@example.org"));
        }

        #[test]
        fn half_configured_admin_is_an_error() {
            let err = AppConfig::from_lookup(AppMode::Local, lookup(&[("ADMIN_USERNAME", "x")]))
                .unwrap_err();
            assert!(err.to_string().contains("ADMIN_PASSWORD"));
        }

        #[test]
        fn debug_output_hides_secrets() {
            let cfg = AppConfig::from_lookup(
                AppMode::Local,
                lookup(&[
                    ("DATABASE_URL", "postgres://shrine:hunter2@db/shrine"),
                    ("ADMIN_USERNAME", "rector"),
                    ("ADMIN_PASSWORD", "Str0ngPassword"),
                ]),
            )
            .unwrap();
            let debug = format!("{cfg:?}");
            assert!(!debug.contains("hunter2"));
            assert!(!debug.contains("Str0ngPassword"));
            assert!(!debug.contains(LOCAL_JWT_SECRET));
        }

        #[test]
        fn redacts_db_url_password() {
            assert_eq!(
                redact_db_url("postgres://shrine:secret@db:5432/shrine"),
                "postgres://shrine:***@db:5432/shrine"
            );
            assert_eq!(redact_db_url("nonsense"), "<invalid DATABASE_URL>");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_mode_defaults_to_production() {
        assert_eq!(AppMode::from_value(""), AppMode::Production);
    }

    #[test]
    fn test_app_mode_local() {
        assert_eq!(AppMode::from_value("local"), AppMode::Local);
    }

    #[test]
    fn test_app_mode_case_insensitive() {
        assert_eq!(AppMode::from_value("LOCAL"), AppMode::Local);
    }

    #[test]
    fn test_app_mode_invalid_defaults_to_production() {
        assert_eq!(AppMode::from_value("invalid"), AppMode::Production);
    }
}
