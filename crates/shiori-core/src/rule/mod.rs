//! Keyword rules and the canned answers they select.

mod model;

pub use model::{Attachment, ChartKind, ResponseTemplate, Rule, SourceRef, normalize};
