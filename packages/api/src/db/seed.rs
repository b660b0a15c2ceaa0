use crate::types::{Testimony, TestimonyStatus};
use anyhow::{Context, Result};
use sqlx::{Any, Pool};
use uuid::Uuid;

/// Fill an empty local database with a little sample content so every page
/// has something to show. Returns whether anything was inserted.
pub async fn seed_if_empty(pool: &Pool<Any>) -> Result<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM announcements")
        .fetch_one(pool)
        .await
        .context("Failed to count announcements")?;
    if count > 0 {
        return Ok(false);
    }

    tracing::info!("Seeding empty database with sample content...");

    let announcements = [
        (
            "Feast of the Holy Family",
            "Solemn high mass followed by the procession around the shrine. All are welcome.",
            "2024-12-29",
        ),
        (
            "Weekly Tamil mass",
            "Holy mass in Tamil every Sunday at 7:30 AM.",
            "",
        ),
    ];
    for (title, body, event_date) in announcements {
        crate::announcements::server::create(pool, title, body, event_date).await?;
    }

    crate::testimonies::server::insert(
        pool,
        Testimony {
            id: Uuid::new_v4(),
            name: "Anthony".to_string(),
            title: "Healing after many prayers".to_string(),
            body: "Our family prayed here for a year and my mother recovered fully. Thanks be to God."
                .to_string(),
            status: TestimonyStatus::Approved,
            created_at: super::now(),
        },
    )
    .await?;

    crate::livestream::server::set(
        pool,
        "Sunday Holy Mass",
        "https://www.youtube.com/embed/live_stream",
        false,
    )
    .await?;

    tracing::info!("Seeded 2 announcements, 1 testimony and the livestream");
    Ok(true)
}
