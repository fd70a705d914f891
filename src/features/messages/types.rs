//! Types for the contact-message inbox endpoints.

use serde::{Deserialize, Serialize};

/// Lifecycle of a received message. New messages are highlighted in the inbox;
/// replying moves a message to `Replied` server-side.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    #[default]
    New,
    Read,
    Replied,
    Archived,
}

impl MessageStatus {
    pub fn label(self) -> &'static str {
        match self {
            MessageStatus::New => "New",
            MessageStatus::Read => "Read",
            MessageStatus::Replied => "Replied",
            MessageStatus::Archived => "Archived",
        }
    }
}

/// A visitor message as the server stores it.
#[derive(Clone, Debug, Deserialize)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub status: MessageStatus,
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of the reply action. The server records the text, flips the status to
/// `replied`, and emails the visitor.
#[derive(Clone, Debug, Serialize)]
pub struct ReplyRequest {
    pub reply: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_message_decodes_with_a_lowercase_status() {
        let body = r#"{
            "id": 5,
            "name": "Grace",
            "email": "grace@example.com",
            "message": "Love the projects page.",
            "status": "replied",
            "reply": "Thanks!",
            "created_at": "2026-08-01T10:00:00Z"
        }"#;
        let message: ContactMessage = serde_json::from_str(body).expect("decode");
        assert_eq!(message.status, MessageStatus::Replied);
        assert_eq!(message.reply.as_deref(), Some("Thanks!"));
    }

    #[test]
    fn a_missing_status_defaults_to_new() {
        let body = r#"{"id":1,"name":"A","email":"a@example.com","message":"hi"}"#;
        let message: ContactMessage = serde_json::from_str(body).expect("decode");
        assert_eq!(message.status, MessageStatus::New);
        assert_eq!(message.status.label(), "New");
    }
}
