//! Client wrappers for the contact-message endpoints. The listing is scoped
//! server-side: owners get their own inbox, admins get everyone's.

use crate::{
    app_lib::{api, AppError},
    features::messages::types::{ContactMessage, ReplyRequest},
};

/// Fetches the caller's inbox, newest first.
pub async fn list_messages() -> Result<Vec<ContactMessage>, AppError> {
    let listing = api::get_listing("/contact-messages/").await?;
    Ok(listing.items)
}

/// Sends a reply to a message; the server emails the visitor and marks the
/// message replied. The response's email delivery status is not surfaced.
pub async fn reply_to_message(id: i64, reply: &str) -> Result<(), AppError> {
    let request = ReplyRequest {
        reply: reply.to_string(),
    };
    api::post_json_discard(&format!("/contact-messages/{id}/reply/"), &request).await
}

/// Marks a message as read.
pub async fn mark_read(id: i64) -> Result<(), AppError> {
    api::post_discard(&format!("/contact-messages/{id}/mark_read/")).await
}

/// Archives a message without deleting it.
pub async fn archive_message(id: i64) -> Result<(), AppError> {
    api::post_discard(&format!("/contact-messages/{id}/archive/")).await
}

/// Deletes a message permanently.
pub async fn delete_message(id: i64) -> Result<(), AppError> {
    api::delete_resource(&format!("/contact-messages/{id}/")).await
}
