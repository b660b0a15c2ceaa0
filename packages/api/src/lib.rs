//! Shared fullstack server functions for the shrine website.
use dioxus::prelude::*;

pub mod config;
pub mod types;

pub mod admin;
pub mod announcements;
pub mod contact;
pub mod gallery;
pub mod livestream;
pub mod prayers;
pub mod testimonies;

#[cfg(feature = "server")]
pub mod db;

#[cfg(feature = "server")]
pub mod email;

#[cfg(feature = "server")]
pub mod storage;

#[cfg(feature = "server")]
pub mod state;

#[cfg(feature = "server")]
pub mod validation;

#[cfg(test)]
mod types_tests;

#[cfg(feature = "server")]
pub mod test_utils;

/// Health check endpoint
#[get("/api/health")]
pub async fn health_check() -> Result<String, ServerFnError> {
    #[cfg(feature = "server")]
    tracing::debug!("health_check");
    Ok("OK".to_string())
}

#[cfg(feature = "server")]
pub(crate) async fn app_state() -> Result<std::sync::Arc<state::AppState>, ServerFnError> {
    state::AppState::global().await.map_err(|e| {
        tracing::error!("app state unavailable: {e:#}");
        ServerFnError::new("Service unavailable")
    })
}

/// Log the full error chain and hand the outermost message to the client.
#[cfg(feature = "server")]
pub(crate) fn server_error(err: anyhow::Error) -> ServerFnError {
    tracing::warn!("server function failed: {err:#}");
    ServerFnError::new(err.to_string())
}

#[cfg(feature = "server")]
pub(crate) fn parse_id(id: &str) -> Result<uuid::Uuid, ServerFnError> {
    uuid::Uuid::parse_str(id.trim()).map_err(|_| ServerFnError::new("Invalid id"))
}

pub use admin::{admin_me, admin_signin};
pub use announcements::{create_announcement, delete_announcement, list_announcements};
pub use contact::{list_contact_messages, submit_contact_message};
pub use gallery::{delete_gallery_image, list_gallery, upload_gallery_image};
pub use livestream::{get_livestream, set_livestream};
pub use prayers::{
    admin_list_prayer_requests, delete_prayer_request, list_prayer_requests,
    mark_prayer_request_prayed, submit_prayer_request,
};
pub use testimonies::{
    admin_list_testimonies, delete_testimony, list_testimonies, set_testimony_status,
    submit_testimony,
};
