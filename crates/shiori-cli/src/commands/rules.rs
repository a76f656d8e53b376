use colored::Colorize;
use shiori_core::domain::{DomainId, DomainRegistry};
use shiori_core::rule::{Attachment, Rule};

/// Prints the rule tables of one domain, or of all domains.
pub fn run(registry: &DomainRegistry, domain: Option<DomainId>) {
    let domains: Vec<DomainId> = match domain {
        Some(domain) => vec![domain],
        None => DomainId::all().collect(),
    };

    for domain in domains {
        let profile = registry.profile(domain);
        println!("{} {}", domain.to_string().bold(), profile.title.bright_black());
        for (index, rule) in profile.rules.iter().enumerate() {
            println!("  {:>2}. {}", index, describe(rule));
        }
        let fallback = match &profile.fallback.attachment {
            Some(attachment) => attachment_tag(attachment),
            None => "text only".to_string(),
        };
        println!("      {} → {}", "fallback".italic(), fallback);
        println!();
    }
}

fn describe(rule: &Rule) -> String {
    let mut matcher = rule.keywords.join(" | ");
    if let Some(required) = &rule.required_keyword {
        matcher = format!("({}) & {}", matcher, required);
    }
    let target = rule
        .template
        .attachment
        .as_ref()
        .map(attachment_tag)
        .unwrap_or_else(|| "text only".to_string());
    format!("{:<24} {} → {}", rule.id.cyan(), matcher, target)
}

fn attachment_tag(attachment: &Attachment) -> String {
    match attachment {
        Attachment::Chart(kind) => format!("chart:{}", kind),
        Attachment::Sources(sources) => format!("sources:{}", sources.len()),
    }
}
