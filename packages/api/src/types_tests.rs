#![cfg(test)]

use crate::types::{PrayerStatus, TestimonyStatus};

#[test]
fn prayer_status_db_mapping() {
    assert_eq!(PrayerStatus::Open.as_db(), "open");
    assert_eq!(PrayerStatus::Prayed.as_db(), "prayed");
    for status in [PrayerStatus::Open, PrayerStatus::Prayed] {
        assert_eq!(PrayerStatus::from_db(status.as_db()), Some(status));
    }
    assert_eq!(PrayerStatus::from_db("answered"), None);
}

#[test]
fn testimony_status_db_mapping() {
    assert_eq!(TestimonyStatus::Pending.as_db(), "pending");
    assert_eq!(TestimonyStatus::Approved.as_db(), "approved");
    assert_eq!(TestimonyStatus::Rejected.as_db(), "rejected");
    assert_eq!(TestimonyStatus::from_db("approved"), Some(TestimonyStatus::Approved));
    assert_eq!(TestimonyStatus::from_db("Approved"), None);
}

#[test]
fn statuses_serialize_as_snake_case() {
    assert_eq!(
        serde_json::to_string(&TestimonyStatus::Pending).unwrap(),
        "\"pending\""
    );
    assert_eq!(
        serde_json::from_str::<PrayerStatus>("\"prayed\"").unwrap(),
        PrayerStatus::Prayed
    );
}
