//! Read-only view of a session.

use serde::{Deserialize, Serialize};

use super::{Message, Stage};
use crate::domain::DomainId;

/// A point-in-time copy of the session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Message log in append order.
    pub messages: Vec<Message>,
    pub stage: Stage,
    pub domain: DomainId,
}

impl SessionSnapshot {
    /// The most recent assistant message, if any.
    pub fn last_answer(&self) -> Option<&Message> {
        self.messages.iter().rev().find(|m| !m.is_user())
    }
}
