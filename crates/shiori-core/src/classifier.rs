//! Keyword rule classifier.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::{DomainId, DomainRegistry};
use crate::rule::{ResponseTemplate, normalize};

/// Which entry of the rule table produced an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchOutcome {
    /// The rule at `index` (zero-based table position) matched first.
    Rule { index: usize, id: String },
    /// No rule matched; the domain fallback was used.
    Fallback,
}

impl MatchOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, MatchOutcome::Fallback)
    }

    /// Id of the matched rule, if any.
    pub fn rule_id(&self) -> Option<&str> {
        match self {
            MatchOutcome::Rule { id, .. } => Some(id),
            MatchOutcome::Fallback => None,
        }
    }
}

/// Result of classifying one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub outcome: MatchOutcome,
    /// Ready-to-synthesize template. Fallback bodies are already rendered.
    pub template: ResponseTemplate,
}

/// Maps a question to the first matching rule of the active domain.
///
/// Classification is total: a validated registry resolves every domain, and a
/// question that matches nothing gets the domain's fallback.
#[derive(Debug, Clone)]
pub struct Classifier {
    registry: Arc<DomainRegistry>,
}

impl Classifier {
    pub fn new(registry: Arc<DomainRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<DomainRegistry> {
        &self.registry
    }

    /// Classifies `question` against the rule table of `domain`.
    ///
    /// Callers are expected to filter out blank questions; a blank question
    /// simply resolves to the fallback.
    pub fn classify(&self, domain: DomainId, question: &str) -> Classification {
        let question = question.trim();
        let normalized = normalize(question);

        let matched = self
            .registry
            .rule_table_for(domain)
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.matches(&normalized));

        if let Some((index, rule)) = matched {
            tracing::debug!("[Classifier] {}: matched rule '{}' (#{})", domain, rule.id, index);
            return Classification {
                outcome: MatchOutcome::Rule {
                    index,
                    id: rule.id.clone(),
                },
                template: rule.template.clone(),
            };
        }

        tracing::debug!("[Classifier] {}: no rule matched, using fallback", domain);
        let fallback = self.registry.fallback_for(domain);
        Classification {
            outcome: MatchOutcome::Fallback,
            template: ResponseTemplate::new(
                self.render_fallback(domain, &fallback.body, question),
                fallback.attachment.clone(),
            ),
        }
    }

    /// A fallback that fails at render time degrades to its raw body.
    fn render_fallback(&self, domain: DomainId, body: &str, question: &str) -> String {
        match self.registry.render_fallback(domain, question) {
            Ok(rendered) => rendered,
            Err(e) => {
                tracing::warn!("[Classifier] {}: failed to render fallback: {}", domain, e);
                body.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Fallback;
    use crate::rule::{Attachment, ChartKind};

    fn classifier() -> Classifier {
        Classifier::new(Arc::new(DomainRegistry::builtin().unwrap()))
    }

    #[test]
    fn test_first_match_wins() {
        // 忌引休暇 contains both 忌引 and 休暇.
        let result = classifier().classify(DomainId::KnowledgeBase, "忌引休暇は何日取れますか？");
        assert_eq!(
            result.outcome,
            MatchOutcome::Rule {
                index: 0,
                id: "bereavement-leave".to_string()
            }
        );
    }

    #[test]
    fn test_fallback_echoes_trimmed_question() {
        let result = classifier().classify(DomainId::KnowledgeBase, "  今日の天気は？ ");
        assert!(result.outcome.is_fallback());
        assert!(result.template.body.contains("「今日の天気は？」"));
        assert_eq!(result.template.attachment, Some(Attachment::Sources(Vec::new())));
    }

    #[test]
    fn test_dataset_fallback_has_no_attachment() {
        let result = classifier().classify(DomainId::Inventory, "今日の天気は？");
        assert!(result.outcome.is_fallback());
        assert!(result.template.attachment.is_none());
        assert!(result.template.body.contains("inventory_data.csv"));
    }

    #[test]
    fn test_ascii_case_is_ignored() {
        let result = classifier().classify(DomainId::Marketing, "チャネル別のroiは？");
        assert_eq!(result.outcome.rule_id(), Some("marketing-roi"));
        assert_eq!(
            result.template.attachment,
            Some(Attachment::Chart(ChartKind::MarketingRoi))
        );
    }

    #[test]
    fn test_fallback_keeps_raw_body_on_render_error() {
        let body = "{{ question | no_such_filter }}";
        let mut profiles = crate::domain::builtin::default_profiles();
        profiles[DomainId::Sales.index()].fallback = Fallback::new(body, None);
        let classifier = Classifier::new(Arc::new(DomainRegistry::new(profiles).unwrap()));

        let result = classifier.classify(DomainId::Sales, "今日の天気は？");
        assert!(result.outcome.is_fallback());
        assert_eq!(result.template.body, body);
    }
}
