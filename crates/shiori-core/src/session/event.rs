use serde::{Deserialize, Serialize};

use super::{Message, Stage};
use crate::domain::DomainId;

/// State changes published by a session, in the order they happen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A message was appended to the log.
    MessageAppended { message: Message },
    /// The processing stage changed.
    StageChanged { stage: Stage },
    /// The log was cleared and the session now answers for `domain`.
    SessionReset { domain: DomainId },
}
