//! Conversation message types.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::rule::Attachment;
use crate::synthesizer::Response;

/// Represents the role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MessageRole {
    /// Question typed by the user.
    User,
    /// Canned answer produced by the pipeline.
    Assistant,
}

/// A single entry of the session's append-only log.
///
/// Messages are never edited after they are appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier (UUID format)
    pub id: String,
    pub role: MessageRole,
    /// Markup body. User messages hold the trimmed question.
    pub body: String,
    /// Chart selector or source list; never set on user messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
    /// Timestamp when the message was created (RFC 3339 format)
    pub created_at: String,
}

impl Message {
    /// Creates a user message stamped with a fresh id and the current time.
    pub fn user(body: impl Into<String>) -> Self {
        Self::with_role(MessageRole::User, body.into(), None)
    }

    /// Creates an assistant message from a synthesized response.
    pub fn assistant(response: Response) -> Self {
        Self::with_role(MessageRole::Assistant, response.body, response.attachment)
    }

    fn with_role(role: MessageRole, body: String, attachment: Option<Attachment>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            body,
            attachment,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == MessageRole::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::ChartKind;

    #[test]
    fn test_user_message() {
        let message = Message::user("経費精算の申請方法は？");
        assert!(message.is_user());
        assert!(message.attachment.is_none());
        assert!(uuid::Uuid::parse_str(&message.id).is_ok());
        assert!(chrono::DateTime::parse_from_rfc3339(&message.created_at).is_ok());
    }

    #[test]
    fn test_assistant_message_keeps_attachment() {
        let message = Message::assistant(Response {
            body: "chart".to_string(),
            attachment: Some(Attachment::Chart(ChartKind::SalesBar)),
        });
        assert_eq!(message.role, MessageRole::Assistant);
        assert_eq!(message.attachment.and_then(|a| a.chart()), Some(ChartKind::SalesBar));
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(Message::user("a").id, Message::user("a").id);
    }
}
