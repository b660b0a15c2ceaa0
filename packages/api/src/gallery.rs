use crate::types::GalleryImage;
use dioxus::prelude::*;

#[dioxus::prelude::get("/api/gallery/list")]
pub async fn list_gallery(limit: i64) -> Result<Vec<GalleryImage>, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = limit;
        Err(ServerFnError::new("list_gallery is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let state = crate::app_state().await?;
        server::list(state.db.pool(), limit)
            .await
            .map_err(crate::server_error)
    }
}

#[dioxus::prelude::post("/api/admin/gallery/upload")]
pub async fn upload_gallery_image(
    token: String,
    caption: String,
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
) -> Result<GalleryImage, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = (token, caption, file_name, content_type, bytes);
        Err(ServerFnError::new("upload_gallery_image is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let state = crate::app_state().await?;
        let admin = crate::admin::server::require_admin(&state, &token)
            .await
            .map_err(crate::server_error)?;
        tracing::info!(
            "gallery.upload: file_name_len={} content_type={} byte_size={} admin={}",
            file_name.len(),
            content_type,
            bytes.len(),
            admin.username
        );
        server::upload(&state, &caption, &content_type, bytes)
            .await
            .map_err(crate::server_error)
    }
}

#[dioxus::prelude::post("/api/admin/gallery/delete")]
pub async fn delete_gallery_image(token: String, id: String) -> Result<(), ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = (token, id);
        Err(ServerFnError::new("delete_gallery_image is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let state = crate::app_state().await?;
        let admin = crate::admin::server::require_admin(&state, &token)
            .await
            .map_err(crate::server_error)?;
        let id = crate::parse_id(&id)?;
        tracing::info!("gallery.delete: id={} admin={}", id, admin.username);
        server::delete(&state, id)
            .await
            .map_err(crate::server_error)
    }
}

#[cfg(feature = "server")]
pub mod server {
    use crate::db::{datetime_from_db, datetime_to_db, now, uuid_from_db, uuid_to_db};
    use crate::state::AppState;
    use crate::types::GalleryImage;
    use crate::validation::{self, TITLE_MAX};
    use anyhow::{bail, Context, Result};
    use sqlx::{any::AnyRow, Any, Pool, Row};
    use uuid::Uuid;

    pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

    /// File extension for the image types the gallery accepts.
    pub fn image_extension(content_type: &str) -> Option<&'static str> {
        match content_type.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Some("jpg"),
            "image/png" => Some("png"),
            "image/webp" => Some("webp"),
            "image/gif" => Some("gif"),
            _ => None,
        }
    }

    fn from_row(row: &AnyRow) -> Result<GalleryImage> {
        Ok(GalleryImage {
            id: uuid_from_db(&row.try_get::<String, _>("id")?)?,
            caption: row.try_get("caption")?,
            url: row.try_get("url")?,
            content_type: row.try_get("content_type")?,
            byte_size: row.try_get("byte_size")?,
            created_at: datetime_from_db(&row.try_get::<String, _>("created_at")?)?,
        })
    }

    pub async fn upload(
        state: &AppState,
        caption: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<GalleryImage> {
        let caption = validation::optional("caption", caption, TITLE_MAX)?.unwrap_or_default();
        let Some(extension) = image_extension(content_type) else {
            bail!("Only JPEG, PNG, WebP and GIF images can be uploaded");
        };
        if bytes.is_empty() {
            bail!("The image is empty");
        }
        if bytes.len() > MAX_IMAGE_BYTES {
            bail!("Images must be at most 10 MB");
        }

        let id = Uuid::new_v4();
        let storage_key = format!("gallery/{id}.{extension}");
        let byte_size = i64::try_from(bytes.len()).context("image too large")?;
        state.storage.upload(&storage_key, bytes).await?;

        let image = GalleryImage {
            id,
            caption,
            url: state.storage.get_url(&storage_key).await?,
            content_type: content_type.trim().to_ascii_lowercase(),
            byte_size,
            created_at: now(),
        };

        let inserted = sqlx::query(
            "INSERT INTO gallery_images (id, caption, storage_key, url, content_type, byte_size, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(uuid_to_db(image.id))
        .bind(&image.caption)
        .bind(&storage_key)
        .bind(&image.url)
        .bind(&image.content_type)
        .bind(image.byte_size)
        .bind(datetime_to_db(image.created_at)?)
        .execute(state.db.pool())
        .await;

        if let Err(e) = inserted {
            // Don't leave an orphaned file behind.
            if let Err(cleanup) = state.storage.delete(&storage_key).await {
                tracing::warn!("gallery.upload: cleanup failed key={storage_key}: {cleanup:#}");
            }
            return Err(e).context("Failed to save gallery image");
        }

        Ok(image)
    }

    /// Newest first.
    pub async fn list(pool: &Pool<Any>, limit: i64) -> Result<Vec<GalleryImage>> {
        let rows = sqlx::query(
            "SELECT id, caption, url, content_type, byte_size, created_at FROM gallery_images \
             ORDER BY created_at DESC LIMIT $1",
        )
        .bind(validation::clamp_limit(limit))
        .fetch_all(pool)
        .await
        .context("Failed to load gallery")?;

        rows.iter().map(from_row).collect()
    }

    /// Removes the stored file, then the row.
    pub async fn delete(state: &AppState, id: Uuid) -> Result<()> {
        let pool = state.db.pool();
        let storage_key: Option<String> =
            sqlx::query_scalar("SELECT storage_key FROM gallery_images WHERE id = $1")
                .bind(uuid_to_db(id))
                .fetch_optional(pool)
                .await
                .context("Failed to load gallery image")?;
        let Some(storage_key) = storage_key else {
            bail!("Gallery image not found");
        };

        // Row before file, so every listed image still has its file.
        sqlx::query("DELETE FROM gallery_images WHERE id = $1")
            .bind(uuid_to_db(id))
            .execute(pool)
            .await
            .context("Failed to delete gallery image")?;
        if let Err(err) = state.storage.delete(&storage_key).await {
            tracing::warn!("gallery.delete: file removal failed key={storage_key}: {err:#}");
        }
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn accepts_common_image_types() {
            assert_eq!(image_extension("image/jpeg"), Some("jpg"));
            assert_eq!(image_extension("IMAGE/PNG"), Some("png"));
            assert_eq!(image_extension("image/webp"), Some("webp"));
            assert_eq!(image_extension("image/gif"), Some("gif"));
        }

        #[test]
        fn rejects_everything_else() {
            for content_type in ["image/svg+xml", "text/html", "application/pdf", ""] {
                assert_eq!(image_extension(content_type), None, "{content_type:?}");
            }
        }
    }
}
