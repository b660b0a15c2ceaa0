use crate::config::{AppConfig, AppMode, DatabaseConfig, EmailConfig, StorageConfig};
use crate::db::{Database, PostgresDatabase, SqliteDatabase};
use crate::email::{ConsoleEmailService, EmailService, SmtpEmailService};
use crate::storage::{filesystem::FilesystemStorageService, StorageService};
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Global application state containing all service implementations
pub struct AppState {
    pub db: Arc<dyn Database>,
    pub email: Arc<dyn EmailService>,
    pub storage: Arc<dyn StorageService>,
    pub config: AppConfig,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Create AppState from configuration
    ///
    /// Connects the database and applies migrations, makes sure the first
    /// admin exists, and seeds an empty local database with sample content.
    pub async fn from_config(config: AppConfig) -> Result<Self> {
        // Required for sqlx::Any pools; without this, AnyPoolOptions panics at runtime.
        sqlx::any::install_default_drivers();

        match config.mode {
            AppMode::Local => tracing::info!("🔧 App Mode: LOCAL"),
            AppMode::Production => tracing::info!("🚀 App Mode: PRODUCTION"),
        }

        let db: Arc<dyn Database> = match &config.database {
            DatabaseConfig::PostgreSQL { url } => {
                tracing::info!(
                    "Connecting to PostgreSQL: {}",
                    crate::config::redact_db_url(url)
                );
                let postgres = PostgresDatabase::connect(url).await?;
                postgres.run_migrations().await?;
                tracing::info!("✓ PostgreSQL connected and migrations applied");
                Arc::new(postgres)
            }
            DatabaseConfig::SQLite { path } => {
                tracing::info!("Connecting to SQLite: {}", path);
                let sqlite = SqliteDatabase::connect(path).await?;
                sqlite.run_migrations().await?;
                tracing::info!("✓ SQLite connected and migrations applied");
                Arc::new(sqlite)
            }
        };

        if let Some(admin) = &config.admin {
            crate::admin::server::bootstrap(db.pool(), admin).await?;
        } else {
            tracing::info!("No ADMIN_USERNAME configured; skipping admin bootstrap");
        }

        if config.mode == AppMode::Local && crate::db::seed::seed_if_empty(db.pool()).await? {
            tracing::info!("✓ Database seeded with sample content");
        }

        let email: Arc<dyn EmailService> = match &config.email {
            EmailConfig::SMTP { host, .. } => {
                tracing::info!("Using SMTP email service: {}", host);
                Arc::new(SmtpEmailService::from_config(&config.email)?)
            }
            EmailConfig::Console => {
                tracing::info!("Using Console email service (not sending)");
                Arc::new(ConsoleEmailService)
            }
        };

        let storage: Arc<dyn StorageService> = match &config.storage {
            StorageConfig::Filesystem {
                base_path,
                serve_url,
            } => {
                tracing::info!("Using Filesystem storage: {} -> {}", base_path, serve_url);
                tokio::fs::create_dir_all(base_path)
                    .await
                    .with_context(|| format!("Failed to create uploads directory {base_path}"))?;
                Arc::new(FilesystemStorageService::new(base_path, serve_url))
            }
        };

        if config.contact_inbox.is_none() {
            tracing::info!("CONTACT_INBOX not set; contact messages are stored only");
        }

        Ok(Self {
            db,
            email,
            storage,
            config,
        })
    }

    /// The process-wide state, built from the environment on first use.
    pub async fn global() -> Result<Arc<Self>> {
        STATE
            .get_or_try_init(|| async {
                let config = AppConfig::from_env().context("Invalid configuration")?;
                let state = Self::from_config(config).await?;
                Ok::<_, anyhow::Error>(Arc::new(state))
            })
            .await
            .cloned()
    }
}

static STATE: OnceCell<Arc<AppState>> = OnceCell::const_new();
