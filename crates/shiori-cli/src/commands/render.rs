use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use shiori_core::markup::{BlockSpan, render_spans};

use crate::view;

/// Renders markup read from `file`, or from stdin when no file is given.
pub fn run(file: Option<&Path>, json: bool) -> Result<()> {
    let body = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("Failed to read stdin")?;
            body
        }
    };

    let spans = render_spans(&body);
    if json {
        println!("{}", serde_json::to_string_pretty(&spans)?);
    } else {
        let blocks: Vec<_> = spans.into_iter().map(|BlockSpan { block, .. }| block).collect();
        for line in view::format_blocks(&blocks) {
            println!("{}", line);
        }
    }

    Ok(())
}
