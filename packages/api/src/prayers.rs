use crate::types::PrayerRequest;
use dioxus::prelude::*;

/// Submit a prayer request. Private requests are only shown to admins.
#[dioxus::prelude::post("/api/prayers/submit")]
pub async fn submit_prayer_request(
    name: String,
    email: String,
    request: String,
    is_private: bool,
) -> Result<PrayerRequest, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = (name, email, request, is_private);
        Err(ServerFnError::new("submit_prayer_request is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let state = crate::app_state().await?;
        let created = server::submit(state.db.pool(), &name, &email, &request, is_private)
            .await
            .map_err(crate::server_error)?;
        tracing::info!(
            "prayers.submit: id={} is_private={}",
            created.id,
            created.is_private
        );
        Ok(created)
    }
}

#[dioxus::prelude::get("/api/prayers/list")]
pub async fn list_prayer_requests(limit: i64) -> Result<Vec<PrayerRequest>, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = limit;
        Err(ServerFnError::new("list_prayer_requests is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let state = crate::app_state().await?;
        server::list_public(state.db.pool(), limit)
            .await
            .map_err(crate::server_error)
    }
}

#[dioxus::prelude::post("/api/admin/prayers/list")]
pub async fn admin_list_prayer_requests(
    token: String,
    limit: i64,
) -> Result<Vec<PrayerRequest>, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = (token, limit);
        Err(ServerFnError::new("admin_list_prayer_requests is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let state = crate::app_state().await?;
        crate::admin::server::require_admin(&state, &token)
            .await
            .map_err(crate::server_error)?;
        server::list_all(state.db.pool(), limit)
            .await
            .map_err(crate::server_error)
    }
}

#[dioxus::prelude::post("/api/admin/prayers/prayed")]
pub async fn mark_prayer_request_prayed(
    token: String,
    id: String,
) -> Result<PrayerRequest, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = (token, id);
        Err(ServerFnError::new("mark_prayer_request_prayed is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let state = crate::app_state().await?;
        let admin = crate::admin::server::require_admin(&state, &token)
            .await
            .map_err(crate::server_error)?;
        let id = crate::parse_id(&id)?;
        tracing::info!("prayers.mark_prayed: id={} admin={}", id, admin.username);
        server::set_status(state.db.pool(), id, crate::types::PrayerStatus::Prayed)
            .await
            .map_err(crate::server_error)
    }
}

#[dioxus::prelude::post("/api/admin/prayers/delete")]
pub async fn delete_prayer_request(token: String, id: String) -> Result<(), ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = (token, id);
        Err(ServerFnError::new("delete_prayer_request is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let state = crate::app_state().await?;
        let admin = crate::admin::server::require_admin(&state, &token)
            .await
            .map_err(crate::server_error)?;
        let id = crate::parse_id(&id)?;
        tracing::info!("prayers.delete: id={} admin={}", id, admin.username);
        server::delete(state.db.pool(), id)
            .await
            .map_err(crate::server_error)
    }
}

#[cfg(feature = "server")]
pub mod server {
    use crate::db::{
        bool_from_db, bool_to_db, datetime_from_db, datetime_to_db, now, uuid_from_db, uuid_to_db,
    };
    use crate::types::{PrayerRequest, PrayerStatus};
    use crate::validation::{self, BODY_MAX, NAME_MAX};
    use anyhow::{anyhow, bail, Context, Result};
    use sqlx::{any::AnyRow, Any, Pool, Row};
    use uuid::Uuid;

    const COLUMNS: &str = "id, name, email, request, is_private, status, created_at";

    fn from_row(row: &AnyRow) -> Result<PrayerRequest> {
        let status: String = row.try_get("status")?;
        Ok(PrayerRequest {
            id: uuid_from_db(&row.try_get::<String, _>("id")?)?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            request: row.try_get("request")?,
            is_private: bool_from_db(row.try_get("is_private")?),
            status: PrayerStatus::from_db(&status)
                .ok_or_else(|| anyhow!("unknown prayer status {status:?}"))?,
            created_at: datetime_from_db(&row.try_get::<String, _>("created_at")?)?,
        })
    }

    pub async fn submit(
        pool: &Pool<Any>,
        name: &str,
        email: &str,
        request: &str,
        is_private: bool,
    ) -> Result<PrayerRequest> {
        let prayer = PrayerRequest {
            id: Uuid::new_v4(),
            name: validation::required("name", name, NAME_MAX)?,
            email: validation::optional_email(email)?,
            request: validation::required("request", request, BODY_MAX)?,
            is_private,
            status: PrayerStatus::Open,
            created_at: now(),
        };

        sqlx::query(&format!(
            "INSERT INTO prayer_requests ({COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6, $7)"
        ))
        .bind(uuid_to_db(prayer.id))
        .bind(&prayer.name)
        .bind(prayer.email.clone())
        .bind(&prayer.request)
        .bind(bool_to_db(prayer.is_private))
        .bind(prayer.status.as_db())
        .bind(datetime_to_db(prayer.created_at)?)
        .execute(pool)
        .await
        .context("Failed to save prayer request")?;

        Ok(prayer)
    }

    /// Public requests, newest first, without contact details.
    pub async fn list_public(pool: &Pool<Any>, limit: i64) -> Result<Vec<PrayerRequest>> {
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM prayer_requests WHERE is_private = 0 \
             ORDER BY created_at DESC LIMIT $1"
        ))
        .bind(validation::clamp_limit(limit))
        .fetch_all(pool)
        .await
        .context("Failed to load prayer requests")?;

        rows.iter()
            .map(|row| {
                let mut prayer = from_row(row)?;
                prayer.email = None;
                Ok(prayer)
            })
            .collect()
    }

    pub async fn list_all(pool: &Pool<Any>, limit: i64) -> Result<Vec<PrayerRequest>> {
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM prayer_requests ORDER BY created_at DESC LIMIT $1"
        ))
        .bind(validation::clamp_limit(limit))
        .fetch_all(pool)
        .await
        .context("Failed to load prayer requests")?;

        rows.iter().map(from_row).collect()
    }

    pub async fn get(pool: &Pool<Any>, id: Uuid) -> Result<Option<PrayerRequest>> {
        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM prayer_requests WHERE id = $1"))
            .bind(uuid_to_db(id))
            .fetch_optional(pool)
            .await
            .context("Failed to load prayer request")?;
        row.as_ref().map(from_row).transpose()
    }

    pub async fn set_status(
        pool: &Pool<Any>,
        id: Uuid,
        status: PrayerStatus,
    ) -> Result<PrayerRequest> {
        let updated = sqlx::query("UPDATE prayer_requests SET status = $1 WHERE id = $2")
            .bind(status.as_db())
            .bind(uuid_to_db(id))
            .execute(pool)
            .await
            .context("Failed to update prayer request")?;
        if updated.rows_affected() == 0 {
            bail!("Prayer request not found");
        }

        get(pool, id).await?.context("Prayer request not found")
    }

    pub async fn delete(pool: &Pool<Any>, id: Uuid) -> Result<()> {
        let deleted = sqlx::query("DELETE FROM prayer_requests WHERE id = $1")
            .bind(uuid_to_db(id))
            .execute(pool)
            .await
            .context("Failed to delete prayer request")?;
        if deleted.rows_affected() == 0 {
            bail!("Prayer request not found");
        }
        Ok(())
    }
}
