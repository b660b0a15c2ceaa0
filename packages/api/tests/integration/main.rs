//! API integration suite. Each test runs against its own SQLite file.

mod admin_tests;
mod announcement_tests;
mod contact_tests;
mod gallery_tests;
mod livestream_tests;
mod prayer_tests;
mod testimony_tests;
