use serde::{Deserialize, Serialize};

/// A displayable unit of an answer body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph { text: String },
    /// A `**...**` line with the markers removed.
    BoldHeading { text: String },
    /// `1. text`
    NumberedItem { number: u64, text: String },
    /// A `※` line with the marker removed.
    Note { text: String },
    /// A run of pipe-table lines. The first row is the header.
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

impl Block {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    pub fn bold_heading(text: impl Into<String>) -> Self {
        Block::BoldHeading { text: text.into() }
    }

    pub fn note(text: impl Into<String>) -> Self {
        Block::Note { text: text.into() }
    }
}

/// A block together with the zero-based line it starts on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSpan {
    pub line: usize,
    pub block: Block,
}
