//! Processing stage of a session.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Where the session is in answering the current question.
///
/// Stage is session state: it belongs to the dispatcher, not to any message.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Stage {
    /// Ready to accept a question.
    #[default]
    Idle,
    /// Knowledge base: looking up documents.
    Searching,
    /// Knowledge base: composing the answer.
    Generating,
    /// Dataset: reading and analysing the data file.
    Loading,
}

impl Stage {
    /// Progress label shown while the stage is active. Idle has none.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Stage::Idle => None,
            Stage::Searching => Some("ドキュメントを検索中..."),
            Stage::Generating => Some("回答を生成中..."),
            Stage::Loading => Some("データを分析中..."),
        }
    }

    pub fn is_idle(self) -> bool {
        self == Stage::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_only_idle_has_no_label() {
        for stage in Stage::iter() {
            assert_eq!(stage.label().is_none(), stage.is_idle(), "{stage}");
        }
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(Stage::default(), Stage::Idle);
        assert_eq!(Stage::Generating.to_string(), "generating");
        assert_eq!("loading".parse::<Stage>().unwrap(), Stage::Loading);
    }
}
