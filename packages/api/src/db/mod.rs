use anyhow::{Context, Result};
use sqlx::{Any, Pool};
use time::{macros::format_description, Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};
use uuid::Uuid;

pub mod postgres;
pub mod seed;
pub mod sqlite;

#[async_trait::async_trait]
pub trait Database: Send + Sync {
    fn pool(&self) -> &Pool<Any>;

    async fn run_migrations(&self) -> Result<()>;
}

// Re-export implementations
pub use postgres::PostgresDatabase;
pub use sqlite::SqliteDatabase;

// The schema is shared by SQLite and PostgreSQL through `sqlx::Any`, which
// only speaks a handful of primitive types. Everything richer is stored as
// text via the helpers below.

pub fn uuid_to_db(id: Uuid) -> String {
    id.hyphenated().to_string()
}

pub fn uuid_from_db(value: &str) -> Result<Uuid> {
    Uuid::parse_str(value).with_context(|| format!("invalid uuid in database: {value:?}"))
}

/// Fixed-width UTC text (microsecond precision), so that ordering by the
/// column as text matches chronological order.
pub fn datetime_to_db(at: OffsetDateTime) -> Result<String> {
    at.to_offset(UtcOffset::UTC)
        .format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]Z"
        ))
        .context("failed to format timestamp")
}

pub fn datetime_from_db(value: &str) -> Result<OffsetDateTime> {
    PrimitiveDateTime::parse(
        value,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]Z"),
    )
    .map(PrimitiveDateTime::assume_utc)
    .with_context(|| format!("invalid timestamp in database: {value:?}"))
}

/// The current time at the precision the database keeps.
pub fn now() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    now.replace_microsecond(now.microsecond()).unwrap_or(now)
}

pub fn now_for_db() -> Result<String> {
    datetime_to_db(now())
}

pub fn date_to_db(date: Date) -> Result<String> {
    date.format(format_description!("[year]-[month]-[day]"))
        .context("failed to format date")
}

pub fn date_from_db(value: &str) -> Result<Date> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .with_context(|| format!("invalid date in database: {value:?}"))
}

pub fn bool_to_db(value: bool) -> i64 {
    i64::from(value)
}

pub fn bool_from_db(value: i64) -> bool {
    value != 0
}
