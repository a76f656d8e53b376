//! Structured-text rendering of answer bodies.

mod block;
mod parser;

pub use block::{Block, BlockSpan};
pub use parser::{render, render_spans};
