//! Throw-away application state for tests: a fresh SQLite file, an uploads
//! directory under the system temp dir, and an email service that records
//! what it was asked to send.

use crate::config::{AppConfig, AppMode, DatabaseConfig, EmailConfig, StorageConfig};
use crate::db::sqlite::SqliteDatabase;
use crate::db::Database;
use crate::email::EmailService;
use crate::state::AppState;
use crate::storage::filesystem::FilesystemStorageService;
use anyhow::{bail, Result};
use async_trait::async_trait;
use sqlx::{Any, Pool};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "test-secret-key-min-32-characters-long";
pub const TEST_ADMIN_USERNAME: &str = "admin";
pub const TEST_ADMIN_PASSWORD: &str = "ChangeMe123";
pub const TEST_CONTACT_INBOX: &str = "office@shrine.test";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub text: String,
}

#[derive(Default)]
pub struct RecordingEmailService {
    sent: Mutex<Vec<SentEmail>>,
    fail: AtomicBool,
}

impl RecordingEmailService {
    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Make every following send fail, as an unreachable SMTP server would.
    pub fn fail_sends(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl EmailService for RecordingEmailService {
    async fn send_email(
        &self,
        to: &str,
        reply_to: Option<&str>,
        subject: &str,
        text: &str,
    ) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            bail!("smtp unavailable");
        }
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(SentEmail {
                to: to.to_string(),
                reply_to: reply_to.map(str::to_string),
                subject: subject.to_string(),
                text: text.to_string(),
            });
        }
        Ok(())
    }
}

pub struct TestContext {
    pub pool: Pool<Any>,
    pub state: Arc<AppState>,
    pub email: Arc<RecordingEmailService>,
    pub uploads_path: PathBuf,
    db_path: PathBuf,
}

impl TestContext {
    pub async fn new() -> Self {
        sqlx::any::install_default_drivers();

        let test_id = Uuid::new_v4();
        let root = std::env::temp_dir();
        let db_path = root.join(format!("shrine-test-{test_id}.db"));
        let uploads_path = root.join(format!("shrine-test-uploads-{test_id}"));

        let database = SqliteDatabase::connect(&db_path.to_string_lossy())
            .await
            .expect("Failed to create test database");
        database
            .run_migrations()
            .await
            .expect("Failed to run migrations");
        let pool = database.pool().clone();

        let config = AppConfig {
            mode: AppMode::Local,
            database: DatabaseConfig::SQLite {
                path: db_path.to_string_lossy().to_string(),
            },
            email: EmailConfig::Console,
            storage: StorageConfig::Filesystem {
                base_path: uploads_path.to_string_lossy().to_string(),
                serve_url: "/uploads".to_string(),
            },
            jwt_secret: TEST_JWT_SECRET.to_string(),
            app_base_url: "http://localhost:8080".to_string(),
            admin: None,
            contact_inbox: Some(TEST_CONTACT_INBOX.to_string()),
        };

        let email = Arc::new(RecordingEmailService::default());
        let state = Arc::new(AppState {
            db: Arc::new(database),
            email: email.clone(),
            storage: Arc::new(FilesystemStorageService::new(
                &uploads_path.to_string_lossy(),
                "/uploads",
            )),
            config,
        });

        Self {
            pool,
            state,
            email,
            uploads_path,
            db_path,
        }
    }

    /// Create the default admin and sign in, returning a bearer token.
    pub async fn admin_token(&self) -> String {
        crate::admin::server::create_admin(&self.pool, TEST_ADMIN_USERNAME, TEST_ADMIN_PASSWORD)
            .await
            .expect("Failed to create test admin");
        crate::admin::server::signin(&self.state, TEST_ADMIN_USERNAME, TEST_ADMIN_PASSWORD)
            .await
            .expect("Failed to sign in test admin")
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_path);
        let _ = std::fs::remove_dir_all(&self.uploads_path);
    }
}
