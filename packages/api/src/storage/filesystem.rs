use super::StorageService;
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Stores uploads under a local directory that the web server exposes at
/// `serve_url`.
pub struct FilesystemStorageService {
    base_path: PathBuf,
    serve_url: String,
}

impl FilesystemStorageService {
    pub fn new(base_path: &str, serve_url: &str) -> Self {
        Self {
            base_path: PathBuf::from(base_path),
            serve_url: serve_url.to_string(),
        }
    }

    /// Keys are relative paths made of plain segments only.
    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let relative = Path::new(key);
        let plain = !key.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !plain {
            bail!("invalid storage key: {key:?}");
        }
        Ok(self.base_path.join(relative))
    }
}

#[async_trait]
impl StorageService for FilesystemStorageService {
    async fn upload(&self, key: &str, data: Vec<u8>) -> Result<()> {
        let file_path = self.path_for(key)?;
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        fs::write(&file_path, data)
            .await
            .with_context(|| format!("Failed to write {}", file_path.display()))?;

        tracing::debug!("Uploaded to {}", file_path.display());
        Ok(())
    }

    async fn get_url(&self, key: &str) -> Result<String> {
        self.path_for(key)?;
        Ok(format!("{}/{}", self.serve_url.trim_end_matches('/'), key))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let file_path = self.path_for(key)?;
        match fs::remove_file(&file_path).await {
            Ok(()) => tracing::debug!("Deleted {}", file_path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("File not found (already deleted): {}", file_path.display())
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to delete {}", file_path.display()))
            }
        }
        Ok(())
    }
}
