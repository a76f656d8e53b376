//! Compiled-in rule tables.
//!
//! One module per domain. Every table is plain data; the registry validates it
//! at startup.

mod customers;
mod inventory;
mod knowledge_base;
mod marketing;
mod sales;

use super::{DomainId, DomainKind, DomainProfile, Fallback};
use crate::rule::Rule;

/// Returns the built-in profiles for every domain.
pub fn default_profiles() -> Vec<DomainProfile> {
    vec![
        knowledge_base::profile(),
        sales::profile(),
        inventory::profile(),
        customers::profile(),
        marketing::profile(),
    ]
}

/// Assembles a dataset profile. The fallback lists the suggestions so users
/// see what the table can answer.
fn dataset_profile(
    id: DomainId,
    title: &str,
    file_name: &str,
    rules: Vec<Rule>,
    suggestions: &[&str],
) -> DomainProfile {
    DomainProfile {
        id,
        title: title.to_string(),
        kind: DomainKind::Dataset {
            file_name: file_name.to_string(),
        },
        rules,
        fallback: dataset_fallback(file_name, suggestions),
        suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
        documents: Vec::new(),
    }
}

fn dataset_fallback(file_name: &str, suggestions: &[&str]) -> Fallback {
    let mut body = format!(
        "「{}」から質問に該当するデータを見つけられませんでした。\n\n**次のような質問をお試しください：**\n",
        file_name
    );
    for suggestion in suggestions {
        body.push_str("- ");
        body.push_str(suggestion);
        body.push('\n');
    }
    body.push_str("\n※ 別のデータを分析する場合は、データファイルを切り替えてください。");
    Fallback::new(body, None)
}
