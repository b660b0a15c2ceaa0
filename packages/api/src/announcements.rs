use crate::types::Announcement;
use dioxus::prelude::*;

#[dioxus::prelude::get("/api/announcements/list")]
pub async fn list_announcements(limit: i64) -> Result<Vec<Announcement>, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = limit;
        Err(ServerFnError::new("list_announcements is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let state = crate::app_state().await?;
        server::list(state.db.pool(), limit)
            .await
            .map_err(crate::server_error)
    }
}

/// `event_date` is `YYYY-MM-DD` or empty.
#[dioxus::prelude::post("/api/admin/announcements/create")]
pub async fn create_announcement(
    token: String,
    title: String,
    body: String,
    event_date: String,
) -> Result<Announcement, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = (token, title, body, event_date);
        Err(ServerFnError::new("create_announcement is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let state = crate::app_state().await?;
        let admin = crate::admin::server::require_admin(&state, &token)
            .await
            .map_err(crate::server_error)?;
        let created = server::create(state.db.pool(), &title, &body, &event_date)
            .await
            .map_err(crate::server_error)?;
        tracing::info!(
            "announcements.create: id={} admin={}",
            created.id,
            admin.username
        );
        Ok(created)
    }
}

#[dioxus::prelude::post("/api/admin/announcements/delete")]
pub async fn delete_announcement(token: String, id: String) -> Result<(), ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = (token, id);
        Err(ServerFnError::new("delete_announcement is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let state = crate::app_state().await?;
        let admin = crate::admin::server::require_admin(&state, &token)
            .await
            .map_err(crate::server_error)?;
        let id = crate::parse_id(&id)?;
        tracing::info!("announcements.delete: id={} admin={}", id, admin.username);
        server::delete(state.db.pool(), id)
            .await
            .map_err(crate::server_error)
    }
}

#[cfg(feature = "server")]
pub mod server {
    use crate::db::{
        date_from_db, date_to_db, datetime_from_db, datetime_to_db, now, uuid_from_db, uuid_to_db,
    };
    use crate::types::Announcement;
    use crate::validation::{self, BODY_MAX, TITLE_MAX};
    use anyhow::{bail, Context, Result};
    use sqlx::{any::AnyRow, Any, Pool, Row};
    use uuid::Uuid;

    fn from_row(row: &AnyRow) -> Result<Announcement> {
        let event_date: Option<String> = row.try_get("event_date")?;
        Ok(Announcement {
            id: uuid_from_db(&row.try_get::<String, _>("id")?)?,
            title: row.try_get("title")?,
            body: row.try_get("body")?,
            event_date: event_date.as_deref().map(date_from_db).transpose()?,
            created_at: datetime_from_db(&row.try_get::<String, _>("created_at")?)?,
        })
    }

    pub async fn create(
        pool: &Pool<Any>,
        title: &str,
        body: &str,
        event_date: &str,
    ) -> Result<Announcement> {
        let announcement = Announcement {
            id: Uuid::new_v4(),
            title: validation::required("title", title, TITLE_MAX)?,
            body: validation::required("body", body, BODY_MAX)?,
            event_date: validation::optional_date("event_date", event_date)?,
            created_at: now(),
        };

        sqlx::query(
            "INSERT INTO announcements (id, title, body, event_date, created_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(uuid_to_db(announcement.id))
        .bind(&announcement.title)
        .bind(&announcement.body)
        .bind(announcement.event_date.map(date_to_db).transpose()?)
        .bind(datetime_to_db(announcement.created_at)?)
        .execute(pool)
        .await
        .context("Failed to save announcement")?;

        Ok(announcement)
    }

    /// Newest first.
    pub async fn list(pool: &Pool<Any>, limit: i64) -> Result<Vec<Announcement>> {
        let rows = sqlx::query(
            "SELECT id, title, body, event_date, created_at FROM announcements \
             ORDER BY created_at DESC LIMIT $1",
        )
        .bind(validation::clamp_limit(limit))
        .fetch_all(pool)
        .await
        .context("Failed to load announcements")?;

        rows.iter().map(from_row).collect()
    }

    pub async fn delete(pool: &Pool<Any>, id: Uuid) -> Result<()> {
        let deleted = sqlx::query("DELETE FROM announcements WHERE id = $1")
            .bind(uuid_to_db(id))
            .execute(pool)
            .await
            .context("Failed to delete announcement")?;
        if deleted.rows_affected() == 0 {
            bail!("Announcement not found");
        }
        Ok(())
    }
}
