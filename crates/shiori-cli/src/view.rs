//! Terminal rendering of messages, blocks and attachments.

use colored::Colorize;
use console::{Alignment, measure_text_width, pad_str};
use shiori_core::markup::{Block, render};
use shiori_core::rule::{Attachment, ChartKind};
use shiori_core::session::{Message, MessageRole, Stage};

/// Caption shown for a chart selector.
pub fn chart_caption(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::SalesBar => "月別売上（棒グラフ）",
        ChartKind::InventoryStock => "製品別在庫と発注点",
        ChartKind::InventoryTrend => "在庫推移（折れ線グラフ）",
        ChartKind::CustomerAge => "年代別顧客数",
        ChartKind::CustomerRegion => "地域別構成比（円グラフ）",
        ChartKind::MarketingRoi => "チャネル別ROI",
        ChartKind::MarketingConversion => "コンバージョン率推移",
    }
}

pub fn print_message(message: &Message) {
    match message.role {
        MessageRole::User => println!("{}", format!("> {}", message.body).green()),
        MessageRole::Assistant => {
            for line in format_blocks(&render(&message.body)) {
                println!("{}", line);
            }
            if let Some(attachment) = &message.attachment {
                for line in format_attachment(attachment) {
                    println!("{}", line);
                }
            }
            println!();
        }
    }
}

pub fn print_stage(stage: Stage) {
    if let Some(label) = stage.label() {
        println!("{}", label.bright_black().italic());
    }
}

/// Formats blocks into terminal lines.
pub fn format_blocks(blocks: &[Block]) -> Vec<String> {
    let mut lines = Vec::new();
    for block in blocks {
        match block {
            Block::Paragraph { text } => lines.push(text.bright_blue().to_string()),
            Block::BoldHeading { text } => lines.push(text.bold().to_string()),
            Block::NumberedItem { number, text } => {
                lines.push(format!("  {}. {}", number.to_string().cyan(), text))
            }
            Block::Note { text } => lines.push(format!("※ {}", text).bright_black().to_string()),
            Block::Table { header, rows } => lines.extend(format_table(header, rows)),
        }
    }
    lines
}

pub fn format_attachment(attachment: &Attachment) -> Vec<String> {
    match attachment {
        Attachment::Chart(kind) => vec![format!("[グラフ] {} ({})", chart_caption(*kind), kind)
            .magenta()
            .to_string()],
        Attachment::Sources(sources) if sources.is_empty() => Vec::new(),
        Attachment::Sources(sources) => {
            let mut lines = vec!["参照元:".yellow().to_string()];
            lines.extend(
                sources
                    .iter()
                    .map(|s| format!("  - {} (p.{})", s.document, s.page)),
            );
            lines
        }
    }
}

/// Lays out a table with columns padded to their display width, so that
/// full-width characters line up.
fn format_table(header: &[String], rows: &[Vec<String>]) -> Vec<String> {
    let columns = rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0);

    let mut widths = vec![0usize; columns];
    for row in std::iter::once(header).chain(rows.iter().map(Vec::as_slice)) {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(measure_text_width(cell));
        }
    }

    let format_row = |row: &[String]| -> String {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, width)| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                pad_str(cell, *width, Alignment::Left, None).into_owned()
            })
            .collect();
        format!("│ {} │", cells.join(" │ "))
    };

    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(header).bold().to_string());
    lines.push(format!("├─{}─┤", rule.join("─┼─")));
    lines.extend(rows.iter().map(|row| format_row(row.as_slice())));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiori_core::rule::SourceRef;

    #[test]
    fn test_table_columns_align_by_display_width() {
        colored::control::set_override(false);
        let blocks = render("| 親等 | 日数 |\n|---|---|\n| 1親等 | 5日間 |\n| 2 | 2日 |");
        let lines = format_blocks(&blocks);
        assert_eq!(lines.len(), 4);
        let width = measure_text_width(&lines[0]);
        assert!(lines.iter().all(|l| measure_text_width(l) == width), "{lines:?}");
    }

    #[test]
    fn test_ragged_rows_are_padded() {
        colored::control::set_override(false);
        let header = vec!["a".to_string(), "b".to_string()];
        let rows = vec![vec!["1".to_string()], vec!["1".into(), "2".into(), "3".into()]];
        let lines = format_table(&header, &rows);
        let width = measure_text_width(&lines[0]);
        assert!(lines.iter().all(|l| measure_text_width(l) == width), "{lines:?}");
    }

    #[test]
    fn test_sources_are_listed_with_pages() {
        colored::control::set_override(false);
        let lines = format_attachment(&Attachment::Sources(vec![SourceRef::new(
            "就業規則.pdf",
            12,
        )]));
        assert_eq!(lines, vec!["参照元:".to_string(), "  - 就業規則.pdf (p.12)".to_string()]);
        assert!(format_attachment(&Attachment::Sources(Vec::new())).is_empty());
    }

    #[test]
    fn test_chart_caption_includes_tag() {
        colored::control::set_override(false);
        let lines = format_attachment(&Attachment::Chart(ChartKind::SalesBar));
        assert_eq!(lines, vec!["[グラフ] 月別売上（棒グラフ） (sales-bar)".to_string()]);
    }
}
