use crate::types::{Testimony, TestimonyStatus};
use dioxus::prelude::*;

/// Share a testimony. It stays hidden until an admin approves it.
#[dioxus::prelude::post("/api/testimonies/submit")]
pub async fn submit_testimony(
    name: String,
    title: String,
    body: String,
) -> Result<Testimony, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = (name, title, body);
        Err(ServerFnError::new("submit_testimony is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let state = crate::app_state().await?;
        let created = server::submit(state.db.pool(), &name, &title, &body)
            .await
            .map_err(crate::server_error)?;
        tracing::info!("testimonies.submit: id={}", created.id);
        Ok(created)
    }
}

#[dioxus::prelude::get("/api/testimonies/list")]
pub async fn list_testimonies(limit: i64) -> Result<Vec<Testimony>, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = limit;
        Err(ServerFnError::new("list_testimonies is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let state = crate::app_state().await?;
        server::list(state.db.pool(), Some(TestimonyStatus::Approved), limit)
            .await
            .map_err(crate::server_error)
    }
}

#[dioxus::prelude::post("/api/admin/testimonies/list")]
pub async fn admin_list_testimonies(
    token: String,
    limit: i64,
) -> Result<Vec<Testimony>, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = (token, limit);
        Err(ServerFnError::new("admin_list_testimonies is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let state = crate::app_state().await?;
        crate::admin::server::require_admin(&state, &token)
            .await
            .map_err(crate::server_error)?;
        server::list(state.db.pool(), None, limit)
            .await
            .map_err(crate::server_error)
    }
}

#[dioxus::prelude::post("/api/admin/testimonies/status")]
pub async fn set_testimony_status(
    token: String,
    id: String,
    status: TestimonyStatus,
) -> Result<Testimony, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = (token, id, status);
        Err(ServerFnError::new("set_testimony_status is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let state = crate::app_state().await?;
        let admin = crate::admin::server::require_admin(&state, &token)
            .await
            .map_err(crate::server_error)?;
        let id = crate::parse_id(&id)?;
        tracing::info!(
            "testimonies.set_status: id={} status={} admin={}",
            id,
            status.as_db(),
            admin.username
        );
        server::set_status(state.db.pool(), id, status)
            .await
            .map_err(crate::server_error)
    }
}

#[dioxus::prelude::post("/api/admin/testimonies/delete")]
pub async fn delete_testimony(token: String, id: String) -> Result<(), ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = (token, id);
        Err(ServerFnError::new("delete_testimony is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let state = crate::app_state().await?;
        let admin = crate::admin::server::require_admin(&state, &token)
            .await
            .map_err(crate::server_error)?;
        let id = crate::parse_id(&id)?;
        tracing::info!("testimonies.delete: id={} admin={}", id, admin.username);
        server::delete(state.db.pool(), id)
            .await
            .map_err(crate::server_error)
    }
}

#[cfg(feature = "server")]
pub mod server {
    use crate::db::{datetime_from_db, datetime_to_db, now, uuid_from_db, uuid_to_db};
    use crate::types::{Testimony, TestimonyStatus};
    use crate::validation::{self, BODY_MAX, NAME_MAX, TITLE_MAX};
    use anyhow::{anyhow, bail, Context, Result};
    use sqlx::{any::AnyRow, Any, Pool, Row};
    use uuid::Uuid;

    const COLUMNS: &str = "id, name, title, body, status, created_at";

    fn from_row(row: &AnyRow) -> Result<Testimony> {
        let status: String = row.try_get("status")?;
        Ok(Testimony {
            id: uuid_from_db(&row.try_get::<String, _>("id")?)?,
            name: row.try_get("name")?,
            title: row.try_get("title")?,
            body: row.try_get("body")?,
            status: TestimonyStatus::from_db(&status)
                .ok_or_else(|| anyhow!("unknown testimony status {status:?}"))?,
            created_at: datetime_from_db(&row.try_get::<String, _>("created_at")?)?,
        })
    }

    pub async fn submit(pool: &Pool<Any>, name: &str, title: &str, body: &str) -> Result<Testimony> {
        insert(
            pool,
            Testimony {
                id: Uuid::new_v4(),
                name: validation::required("name", name, NAME_MAX)?,
                title: validation::required("title", title, TITLE_MAX)?,
                body: validation::required("body", body, BODY_MAX)?,
                status: TestimonyStatus::Pending,
                created_at: now(),
            },
        )
        .await
    }

    pub(crate) async fn insert(pool: &Pool<Any>, testimony: Testimony) -> Result<Testimony> {
        sqlx::query(&format!(
            "INSERT INTO testimonies ({COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6)"
        ))
        .bind(uuid_to_db(testimony.id))
        .bind(&testimony.name)
        .bind(&testimony.title)
        .bind(&testimony.body)
        .bind(testimony.status.as_db())
        .bind(datetime_to_db(testimony.created_at)?)
        .execute(pool)
        .await
        .context("Failed to save testimony")?;

        Ok(testimony)
    }

    /// Newest first, optionally restricted to one status.
    pub async fn list(
        pool: &Pool<Any>,
        status: Option<TestimonyStatus>,
        limit: i64,
    ) -> Result<Vec<Testimony>> {
        let limit = validation::clamp_limit(limit);
        let rows = match status {
            Some(status) => {
                sqlx::query(&format!(
                    "SELECT {COLUMNS} FROM testimonies WHERE status = $1 \
                     ORDER BY created_at DESC LIMIT $2"
                ))
                .bind(status.as_db())
                .bind(limit)
                .fetch_all(pool)
                .await
            }
            None => {
                sqlx::query(&format!(
                    "SELECT {COLUMNS} FROM testimonies ORDER BY created_at DESC LIMIT $1"
                ))
                .bind(limit)
                .fetch_all(pool)
                .await
            }
        }
        .context("Failed to load testimonies")?;

        rows.iter().map(from_row).collect()
    }

    pub async fn set_status(
        pool: &Pool<Any>,
        id: Uuid,
        status: TestimonyStatus,
    ) -> Result<Testimony> {
        let updated = sqlx::query("UPDATE testimonies SET status = $1 WHERE id = $2")
            .bind(status.as_db())
            .bind(uuid_to_db(id))
            .execute(pool)
            .await
            .context("Failed to update testimony")?;
        if updated.rows_affected() == 0 {
            bail!("Testimony not found");
        }

        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM testimonies WHERE id = $1"))
            .bind(uuid_to_db(id))
            .fetch_one(pool)
            .await
            .context("Failed to load testimony")?;
        from_row(&row)
    }

    pub async fn delete(pool: &Pool<Any>, id: Uuid) -> Result<()> {
        let deleted = sqlx::query("DELETE FROM testimonies WHERE id = $1")
            .bind(uuid_to_db(id))
            .execute(pool)
            .await
            .context("Failed to delete testimony")?;
        if deleted.rows_affected() == 0 {
            bail!("Testimony not found");
        }
        Ok(())
    }
}
