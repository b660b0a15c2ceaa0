use crate::types::Livestream;
use dioxus::prelude::*;

/// The current stream, or `None` before an admin has configured one.
#[dioxus::prelude::get("/api/livestream")]
pub async fn get_livestream() -> Result<Option<Livestream>, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("get_livestream is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let state = crate::app_state().await?;
        server::get(state.db.pool())
            .await
            .map_err(crate::server_error)
    }
}

#[dioxus::prelude::post("/api/admin/livestream")]
pub async fn set_livestream(
    token: String,
    title: String,
    embed_url: String,
    is_live: bool,
) -> Result<Livestream, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = (token, title, embed_url, is_live);
        Err(ServerFnError::new("set_livestream is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let state = crate::app_state().await?;
        let admin = crate::admin::server::require_admin(&state, &token)
            .await
            .map_err(crate::server_error)?;
        tracing::info!("livestream.set: is_live={} admin={}", is_live, admin.username);
        server::set(state.db.pool(), &title, &embed_url, is_live)
            .await
            .map_err(crate::server_error)
    }
}

#[cfg(feature = "server")]
pub mod server {
    use crate::db::{bool_from_db, bool_to_db, datetime_from_db, datetime_to_db, now};
    use crate::types::Livestream;
    use crate::validation::{self, TITLE_MAX};
    use anyhow::{Context, Result};
    use sqlx::{Any, Pool, Row};

    /// There is only ever one stream record.
    const STREAM_ID: &str = "main";

    pub async fn get(pool: &Pool<Any>) -> Result<Option<Livestream>> {
        let row = sqlx::query(
            "SELECT title, embed_url, is_live, updated_at FROM livestreams WHERE id = $1",
        )
        .bind(STREAM_ID)
        .fetch_optional(pool)
        .await
        .context("Failed to load livestream")?;

        let Some(row) = row else {
            return Ok(None);
        };
        Ok(Some(Livestream {
            title: row.try_get("title")?,
            embed_url: row.try_get("embed_url")?,
            is_live: bool_from_db(row.try_get("is_live")?),
            updated_at: datetime_from_db(&row.try_get::<String, _>("updated_at")?)?,
        }))
    }

    pub async fn set(
        pool: &Pool<Any>,
        title: &str,
        embed_url: &str,
        is_live: bool,
    ) -> Result<Livestream> {
        let stream = Livestream {
            title: validation::required("title", title, TITLE_MAX)?,
            embed_url: validation::http_url("embed_url", embed_url)?,
            is_live,
            updated_at: now(),
        };

        sqlx::query(
            "INSERT INTO livestreams (id, title, embed_url, is_live, updated_at) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (id) DO UPDATE SET title = excluded.title, \
             embed_url = excluded.embed_url, is_live = excluded.is_live, \
             updated_at = excluded.updated_at",
        )
        .bind(STREAM_ID)
        .bind(&stream.title)
        .bind(&stream.embed_url)
        .bind(bool_to_db(stream.is_live))
        .bind(datetime_to_db(stream.updated_at)?)
        .execute(pool)
        .await
        .context("Failed to save livestream")?;

        Ok(stream)
    }
}
