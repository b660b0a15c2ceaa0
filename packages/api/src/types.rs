use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrayerStatus {
    Open,
    Prayed,
}

impl PrayerStatus {
    pub fn as_db(&self) -> &'static str {
        match self {
            PrayerStatus::Open => "open",
            PrayerStatus::Prayed => "prayed",
        }
    }

    pub fn from_db(value: &str) -> Option<Self> {
        match value {
            "open" => Some(PrayerStatus::Open),
            "prayed" => Some(PrayerStatus::Prayed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestimonyStatus {
    Pending,
    Approved,
    Rejected,
}

impl TestimonyStatus {
    pub fn as_db(&self) -> &'static str {
        match self {
            TestimonyStatus::Pending => "pending",
            TestimonyStatus::Approved => "approved",
            TestimonyStatus::Rejected => "rejected",
        }
    }

    pub fn from_db(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(TestimonyStatus::Pending),
            "approved" => Some(TestimonyStatus::Approved),
            "rejected" => Some(TestimonyStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrayerRequest {
    pub id: Uuid,
    pub name: String,
    /// Only populated for admin listings.
    pub email: Option<String>,
    pub request: String,
    pub is_private: bool,
    pub status: PrayerStatus,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimony {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub body: String,
    pub status: TestimonyStatus,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub event_date: Option<Date>,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: Uuid,
    pub caption: String,
    pub url: String,
    pub content_type: String,
    pub byte_size: i64,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Livestream {
    pub title: String,
    pub embed_url: String,
    pub is_live: bool,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminInfo {
    pub id: Uuid,
    pub username: String,
}
