use crate::types::ContactMessage;
use dioxus::prelude::*;

#[dioxus::prelude::post("/api/contact")]
pub async fn submit_contact_message(
    name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<(), ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = (name, email, subject, message);
        Err(ServerFnError::new("submit_contact_message is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let state = crate::app_state().await?;
        let stored = server::submit(&state, &name, &email, &subject, &message)
            .await
            .map_err(crate::server_error)?;
        tracing::info!("contact.submit: id={}", stored.id);
        Ok(())
    }
}

#[dioxus::prelude::post("/api/admin/contact/list")]
pub async fn list_contact_messages(
    token: String,
    limit: i64,
) -> Result<Vec<ContactMessage>, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = (token, limit);
        Err(ServerFnError::new("list_contact_messages is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let state = crate::app_state().await?;
        crate::admin::server::require_admin(&state, &token)
            .await
            .map_err(crate::server_error)?;
        server::list(state.db.pool(), limit)
            .await
            .map_err(crate::server_error)
    }
}

#[cfg(feature = "server")]
pub mod server {
    use crate::db::{datetime_from_db, datetime_to_db, now, uuid_from_db, uuid_to_db};
    use crate::state::AppState;
    use crate::types::ContactMessage;
    use crate::validation::{self, BODY_MAX, NAME_MAX, SUBJECT_MAX};
    use anyhow::{Context, Result};
    use sqlx::{Any, Pool, Row};
    use uuid::Uuid;

    /// Store the message, then notify the inbox. A failed notification is
    /// logged and does not fail the submission.
    pub async fn submit(
        state: &AppState,
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
    ) -> Result<ContactMessage> {
        let stored = ContactMessage {
            id: Uuid::new_v4(),
            name: validation::required("name", name, NAME_MAX)?,
            email: validation::email(email)?,
            subject: validation::required("subject", subject, SUBJECT_MAX)?,
            message: validation::required("message", message, BODY_MAX)?,
            created_at: now(),
        };

        sqlx::query(
            "INSERT INTO contact_messages (id, name, email, subject, message, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(uuid_to_db(stored.id))
        .bind(&stored.name)
        .bind(&stored.email)
        .bind(&stored.subject)
        .bind(&stored.message)
        .bind(datetime_to_db(stored.created_at)?)
        .execute(state.db.pool())
        .await
        .context("Failed to save contact message")?;

        if let Some(inbox) = &state.config.contact_inbox {
            if let Err(e) =
                crate::email::send_contact_notification(state.email.as_ref(), inbox, &stored).await
            {
                tracing::warn!("contact.submit: notification failed id={}: {e:#}", stored.id);
            }
        }

        Ok(stored)
    }

    /// Newest first.
    pub async fn list(pool: &Pool<Any>, limit: i64) -> Result<Vec<ContactMessage>> {
        let rows = sqlx::query(
            "SELECT id, name, email, subject, message, created_at FROM contact_messages \
             ORDER BY created_at DESC LIMIT $1",
        )
        .bind(validation::clamp_limit(limit))
        .fetch_all(pool)
        .await
        .context("Failed to load contact messages")?;

        rows.iter()
            .map(|row| {
                Ok(ContactMessage {
                    id: uuid_from_db(&row.try_get::<String, _>("id")?)?,
                    name: row.try_get("name")?,
                    email: row.try_get("email")?,
                    subject: row.try_get("subject")?,
                    message: row.try_get("message")?,
                    created_at: datetime_from_db(&row.try_get::<String, _>("created_at")?)?,
                })
            })
            .collect()
    }
}
