use std::sync::Arc;

use shiori_core::classifier::{Classifier, MatchOutcome};
use shiori_core::domain::{DomainId, DomainRegistry};
use shiori_core::markup::{Block, render};
use shiori_core::rule::{Attachment, ChartKind, SourceRef};
use shiori_core::synthesizer::synthesize;

fn classifier() -> Classifier {
    Classifier::new(Arc::new(
        DomainRegistry::builtin().expect("builtin registry should be valid"),
    ))
}

#[test]
fn test_every_rule_is_reachable() {
    let classifier = classifier();
    let registry = classifier.registry().clone();

    for domain in DomainId::all() {
        let table = registry.rule_table_for(domain);
        for (index, rule) in table.iter().enumerate() {
            let earlier_keywords: Vec<&str> = table[..index]
                .iter()
                .flat_map(|r| r.keywords.iter().map(String::as_str))
                .collect();

            let mut checked = 0;
            for keyword in &rule.keywords {
                let question = format!(
                    "{}{}",
                    keyword,
                    rule.required_keyword.as_deref().unwrap_or_default()
                );
                if earlier_keywords.iter().any(|k| question.contains(k)) {
                    continue;
                }
                let result = classifier.classify(domain, &question);
                assert_eq!(
                    result.outcome,
                    MatchOutcome::Rule {
                        index,
                        id: rule.id.clone()
                    },
                    "{domain}: '{question}'"
                );
                assert_eq!(result.template, rule.template);
                checked += 1;
            }
            assert!(checked > 0, "{domain}: rule '{}' is shadowed", rule.id);
        }
    }
}

#[test]
fn test_unrelated_question_uses_fallback_everywhere() {
    let classifier = classifier();
    for domain in DomainId::all() {
        let result = classifier.classify(domain, "今日の天気は？");
        assert!(result.outcome.is_fallback(), "{domain}");
    }
}

#[test]
fn test_required_keyword_is_enforced() {
    let classifier = classifier();
    let without = classifier.classify(DomainId::Sales, "売上の増減は？");
    assert_eq!(without.outcome.rule_id(), Some("sales-trend"));

    let with = classifier.classify(DomainId::Sales, "前月比の増減は？");
    assert_eq!(with.outcome.rule_id(), Some("sales-month-over-month"));
}

#[test]
fn test_suggestions_are_answered_by_rules() {
    let classifier = classifier();
    let registry = classifier.registry().clone();
    for profile in registry.profiles() {
        assert!(!profile.suggestions.is_empty(), "{}", profile.id);
        for suggestion in &profile.suggestions {
            let result = classifier.classify(profile.id, suggestion);
            assert!(!result.outcome.is_fallback(), "{}: '{}'", profile.id, suggestion);
        }
    }
}

#[test]
fn test_sales_chart_scenario() {
    let result = classifier().classify(DomainId::Sales, "売上推移をグラフにして");
    assert_eq!(result.outcome.rule_id(), Some("sales-trend"));

    let response = synthesize(&result.template);
    assert_eq!(response.attachment, Some(Attachment::Chart(ChartKind::SalesBar)));
}

#[test]
fn test_expense_citation_scenario() {
    let result = classifier().classify(DomainId::KnowledgeBase, "経費精算の申請方法は？");
    assert_eq!(result.outcome.rule_id(), Some("expense-reimbursement"));

    let response = synthesize(&result.template);
    let sources = response
        .attachment
        .as_ref()
        .and_then(Attachment::sources)
        .expect("knowledge base answers carry sources");
    assert_eq!(sources.len(), 2);
    assert!(sources.iter().all(|s| s.document == "経費精算マニュアル.pdf"));
}

#[test]
fn test_knowledge_base_fallback_scenario() {
    let result = classifier().classify(DomainId::KnowledgeBase, "今日の天気は？");
    assert!(result.outcome.is_fallback());

    let response = synthesize(&result.template);
    assert!(response.body.contains("今日の天気は？"));
    assert_eq!(response.attachment, Some(Attachment::Sources(Vec::<SourceRef>::new())));
}

#[test]
fn test_dataset_answers_carry_charts() {
    let registry = DomainRegistry::builtin().unwrap();
    for domain in DomainId::all().filter(|d| *d != DomainId::KnowledgeBase) {
        for rule in registry.rule_table_for(domain) {
            assert!(
                rule.template.attachment.as_ref().and_then(Attachment::chart).is_some(),
                "{domain}: {}",
                rule.id
            );
        }
    }
}

#[test]
fn test_builtin_bodies_render_tables() {
    let registry = DomainRegistry::builtin().unwrap();
    for domain in DomainId::all() {
        for rule in registry.rule_table_for(domain) {
            let blocks = render(&rule.template.body);
            assert!(!blocks.is_empty(), "{}", rule.id);
            assert!(
                blocks.iter().all(|b| match b {
                    Block::Paragraph { text } => !text.starts_with('|'),
                    _ => true,
                }),
                "{}: table line leaked into a paragraph",
                rule.id
            );
            if rule.template.body.contains("|---") {
                assert!(
                    blocks.iter().any(|b| matches!(b, Block::Table { .. })),
                    "{}",
                    rule.id
                );
            }
        }
    }
}
