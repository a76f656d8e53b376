//! Line-oriented parser for answer bodies.
//!
//! The accepted markup is a small subset: pipe tables, `**bold**` heading
//! lines, `1.` numbered items and `※` notes. Everything else is a paragraph.
//! Parsing never fails; unexpected input degrades to paragraphs.

use once_cell::sync::Lazy;
use regex::Regex;

use super::block::{Block, BlockSpan};

static NUMBERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+)\.\s+(.*)$").unwrap());

const NOTE_MARKER: char = '※';
const BOLD_MARKER: &str = "**";
const DASH_RUN: &str = "--";

/// Renders a body into blocks in source order.
pub fn render(body: &str) -> Vec<Block> {
    render_spans(body).into_iter().map(|span| span.block).collect()
}

/// Like [`render`], but keeps the zero-based line each block starts on.
pub fn render_spans(body: &str) -> Vec<BlockSpan> {
    let mut blocks = Vec::new();
    let mut table = PendingTable::default();

    for (line_no, raw) in body.lines().enumerate() {
        let line = raw.trim();

        if is_table_line(line) {
            let cells = split_cells(line);
            if !is_separator(line, &cells) {
                table.push(line_no, cells);
            }
            continue;
        }

        if let Some(span) = table.flush() {
            blocks.push(span);
        }

        if let Some(block) = classify_line(line) {
            blocks.push(BlockSpan {
                line: line_no,
                block,
            });
        }
    }

    if let Some(span) = table.flush() {
        blocks.push(span);
    }

    blocks
}

fn classify_line(line: &str) -> Option<Block> {
    if line.is_empty() {
        return None;
    }

    if let Some(text) = bold_text(line) {
        return Some(Block::bold_heading(text));
    }

    if let Some(caps) = NUMBERED_ITEM.captures(line) {
        // Digit runs too long for u64 are left as plain text.
        if let Ok(number) = caps[1].parse::<u64>() {
            return Some(Block::NumberedItem {
                number,
                text: caps[2].trim().to_string(),
            });
        }
    }

    if let Some(text) = line.strip_prefix(NOTE_MARKER) {
        return Some(Block::note(text.trim()));
    }

    Some(Block::paragraph(line))
}

/// A line wrapped in `**` becomes a heading with every marker removed.
fn bold_text(line: &str) -> Option<String> {
    if line.len() < BOLD_MARKER.len() * 2 {
        return None;
    }
    line.strip_prefix(BOLD_MARKER)?
        .strip_suffix(BOLD_MARKER)
        .map(|text| text.replace(BOLD_MARKER, ""))
}

fn is_table_line(line: &str) -> bool {
    line.len() >= 2 && line.starts_with('|') && line.ends_with('|')
}

/// Splits `| a | b |` into `["a", "b"]`.
fn split_cells(line: &str) -> Vec<String> {
    let inner = &line[1..line.len() - 1];
    inner.split('|').map(|cell| cell.trim().to_string()).collect()
}

/// Table delimiter rows. Any table line holding a dash run (`--`) counts,
/// as does a `|-|:-:|` row whose every cell is dashes.
fn is_separator(line: &str, cells: &[String]) -> bool {
    if line.contains(DASH_RUN) {
        return true;
    }
    !cells.is_empty()
        && cells.iter().all(|cell| {
            let dashes = cell.trim_start_matches(':').trim_end_matches(':');
            !dashes.is_empty() && dashes.chars().all(|c| c == '-')
        })
}

#[derive(Default)]
struct PendingTable {
    start: Option<usize>,
    rows: Vec<Vec<String>>,
}

impl PendingTable {
    fn push(&mut self, line_no: usize, cells: Vec<String>) {
        self.start.get_or_insert(line_no);
        self.rows.push(cells);
    }

    fn flush(&mut self) -> Option<BlockSpan> {
        let start = self.start.take();
        let mut rows = std::mem::take(&mut self.rows).into_iter();
        let header = rows.next()?;
        Some(BlockSpan {
            line: start.unwrap_or_default(),
            block: Block::Table {
                header,
                rows: rows.collect(),
            },
        })
    }
}
