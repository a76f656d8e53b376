//! The immutable domain registry.

use std::collections::HashSet;

use minijinja::{Environment, context};

use super::builtin;
use super::model::{DomainId, DomainProfile, Fallback};
use crate::error::{Result, ShioriError};
use crate::rule::{Attachment, Rule, SourceRef};

/// Maps every domain to its rule table, fallback and metadata.
///
/// A registry is built once at startup and shared read-only (usually behind an
/// `Arc`). Construction validates the whole configuration, so once a registry
/// exists every [`DomainId`] resolves to a profile and lookups cannot fail.
#[derive(Debug, Clone)]
pub struct DomainRegistry {
    /// Indexed by [`DomainId::index`].
    profiles: Vec<DomainProfile>,
    /// Fallback bodies compiled once, keyed by domain id.
    fallbacks: Environment<'static>,
}

impl DomainRegistry {
    /// Builds a registry from one profile per domain.
    ///
    /// # Errors
    ///
    /// Returns [`ShioriError::Config`] when a domain is missing or duplicated,
    /// a rule is vacuous (no keywords, blank keyword), a rule id repeats within
    /// a table, a citation points outside the domain's document catalog, and
    /// [`ShioriError::Template`] when a fallback body does not compile.
    pub fn new(profiles: Vec<DomainProfile>) -> Result<Self> {
        let mut slots: Vec<Option<DomainProfile>> = vec![None; DomainId::COUNT];

        for profile in profiles {
            let slot = &mut slots[profile.id.index()];
            if slot.is_some() {
                return Err(ShioriError::config(format!(
                    "domain '{}' is registered twice",
                    profile.id
                )));
            }
            validate_profile(&profile)?;
            *slot = Some(profile);
        }

        let profiles = slots
            .into_iter()
            .zip(DomainId::all())
            .map(|(slot, id)| {
                slot.ok_or_else(|| ShioriError::config(format!("domain '{}' has no profile", id)))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut fallbacks = Environment::new();
        for profile in &profiles {
            fallbacks.add_template_owned(profile.id.to_string(), profile.fallback.body.clone())?;
        }

        tracing::debug!(
            "[Registry] Loaded {} domains ({} rules)",
            profiles.len(),
            profiles.iter().map(|p| p.rules.len()).sum::<usize>()
        );

        Ok(Self {
            profiles,
            fallbacks,
        })
    }

    /// The compiled-in rule tables for the knowledge base and the bundled
    /// datasets.
    pub fn builtin() -> Result<Self> {
        Self::new(builtin::default_profiles())
    }

    /// Full profile of a domain.
    pub fn profile(&self, domain: DomainId) -> &DomainProfile {
        &self.profiles[domain.index()]
    }

    /// Ordered rule table of a domain.
    pub fn rule_table_for(&self, domain: DomainId) -> &[Rule] {
        &self.profile(domain).rules
    }

    /// Fallback answer of a domain.
    pub fn fallback_for(&self, domain: DomainId) -> &Fallback {
        &self.profile(domain).fallback
    }

    /// Renders the fallback body of a domain with `question` bound.
    ///
    /// # Errors
    ///
    /// Returns [`ShioriError::Template`] when rendering fails at runtime, e.g.
    /// an unknown filter.
    pub fn render_fallback(&self, domain: DomainId, question: &str) -> Result<String> {
        let template = self.fallbacks.get_template(domain.as_ref())?;
        Ok(template.render(context! { question })?)
    }

    /// All profiles in registry order.
    pub fn profiles(&self) -> impl Iterator<Item = &DomainProfile> {
        self.profiles.iter()
    }
}

fn validate_profile(profile: &DomainProfile) -> Result<()> {
    let mut seen_ids = HashSet::new();

    for rule in &profile.rules {
        if !seen_ids.insert(rule.id.as_str()) {
            return Err(ShioriError::config(format!(
                "domain '{}': duplicate rule id '{}'",
                profile.id, rule.id
            )));
        }
        if rule.keywords.is_empty() {
            return Err(ShioriError::config(format!(
                "domain '{}': rule '{}' has no keywords",
                profile.id, rule.id
            )));
        }
        let blank_keyword = rule
            .keywords
            .iter()
            .chain(rule.required_keyword.iter())
            .any(|k| k.trim().is_empty());
        if blank_keyword {
            return Err(ShioriError::config(format!(
                "domain '{}': rule '{}' has a blank keyword",
                profile.id, rule.id
            )));
        }
        if let Some(attachment) = &rule.template.attachment {
            validate_citations(profile, &rule.id, attachment)?;
        }
    }

    if let Some(attachment) = &profile.fallback.attachment {
        validate_citations(profile, "fallback", attachment)?;
    }

    Ok(())
}

fn validate_citations(profile: &DomainProfile, owner: &str, attachment: &Attachment) -> Result<()> {
    let Some(sources) = attachment.sources() else {
        return Ok(());
    };

    for SourceRef { document, page } in sources {
        let entry = profile.document(document).ok_or_else(|| {
            ShioriError::config(format!(
                "domain '{}': '{}' cites unknown document '{}'",
                profile.id, owner, document
            ))
        })?;
        if *page == 0 || *page > entry.pages {
            return Err(ShioriError::config(format!(
                "domain '{}': '{}' cites {} page {} (document has {} pages)",
                profile.id, owner, document, page, entry.pages
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DocumentEntry, DomainKind};
    use crate::rule::{ChartKind, ResponseTemplate};

    fn dataset_profile(id: DomainId) -> DomainProfile {
        DomainProfile {
            id,
            title: id.to_string(),
            kind: DomainKind::Dataset {
                file_name: format!("{}.csv", id),
            },
            rules: vec![Rule::new(
                "chart",
                ["グラフ"],
                ResponseTemplate::with_chart("chart", ChartKind::SalesBar),
            )],
            fallback: Fallback::new("no match", None),
            suggestions: Vec::new(),
            documents: Vec::new(),
        }
    }

    fn complete_profiles() -> Vec<DomainProfile> {
        DomainId::all().map(dataset_profile).collect()
    }

    #[test]
    fn test_builtin_registry_is_valid() {
        let registry = DomainRegistry::builtin().unwrap();
        for domain in DomainId::all() {
            assert_eq!(registry.profile(domain).id, domain);
            assert!(!registry.rule_table_for(domain).is_empty());
        }
    }

    #[test]
    fn test_profiles_are_reordered_by_domain() {
        let mut profiles = complete_profiles();
        profiles.reverse();
        let registry = DomainRegistry::new(profiles).unwrap();
        let order: Vec<DomainId> = registry.profiles().map(|p| p.id).collect();
        assert_eq!(order, DomainId::all().collect::<Vec<_>>());
    }

    #[test]
    fn test_missing_domain_is_rejected() {
        let mut profiles = complete_profiles();
        profiles.retain(|p| p.id != DomainId::Inventory);
        let err = DomainRegistry::new(profiles).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("inventory"));
    }

    #[test]
    fn test_duplicate_domain_is_rejected() {
        let mut profiles = complete_profiles();
        profiles.push(dataset_profile(DomainId::Sales));
        assert!(DomainRegistry::new(profiles).unwrap_err().is_config());
    }

    #[test]
    fn test_vacuous_rule_is_rejected() {
        let mut profiles = complete_profiles();
        profiles[1].rules.push(Rule::new(
            "empty",
            Vec::<String>::new(),
            ResponseTemplate::new("x", None),
        ));
        assert!(DomainRegistry::new(profiles).unwrap_err().is_config());

        let mut profiles = complete_profiles();
        profiles[1]
            .rules
            .push(Rule::new("blank", ["  "], ResponseTemplate::new("x", None)));
        assert!(DomainRegistry::new(profiles).unwrap_err().is_config());
    }

    #[test]
    fn test_duplicate_rule_id_is_rejected() {
        let mut profiles = complete_profiles();
        let copy = profiles[2].rules[0].clone();
        profiles[2].rules.push(copy);
        assert!(DomainRegistry::new(profiles).unwrap_err().is_config());
    }

    #[test]
    fn test_broken_fallback_template_is_rejected() {
        let mut profiles = complete_profiles();
        profiles[0].fallback = Fallback::new("{{ question ", None);
        let err = DomainRegistry::new(profiles).unwrap_err();
        assert!(matches!(err, ShioriError::Template(_)));
        assert!(err.to_string().contains("knowledge-base"), "{err}");
    }

    #[test]
    fn test_render_fallback_binds_question() {
        let mut profiles = complete_profiles();
        profiles[1].fallback = Fallback::new("「{{ question }}」は対象外です", None);
        let registry = DomainRegistry::new(profiles).unwrap();
        assert_eq!(
            registry.render_fallback(DomainId::Sales, "天気").unwrap(),
            "「天気」は対象外です"
        );
    }

    #[test]
    fn test_render_fallback_reports_runtime_errors() {
        let mut profiles = complete_profiles();
        profiles[1].fallback = Fallback::new("{{ question | no_such_filter }}", None);
        let registry = DomainRegistry::new(profiles).unwrap();
        let err = registry.render_fallback(DomainId::Sales, "q").unwrap_err();
        assert!(matches!(err, ShioriError::Template(_)));
    }

    #[test]
    fn test_citation_outside_catalog_is_rejected() {
        let mut profiles = complete_profiles();
        profiles[0].documents = vec![DocumentEntry::new("manual.pdf", 3, "2024/01/01")];
        profiles[0].rules.push(Rule::new(
            "cited",
            ["manual"],
            ResponseTemplate::with_sources("see manual", vec![SourceRef::new("manual.pdf", 4)]),
        ));
        let err = DomainRegistry::new(profiles).unwrap_err();
        assert!(err.to_string().contains("page 4"));

        let mut profiles = complete_profiles();
        profiles[0].rules.push(Rule::new(
            "cited",
            ["manual"],
            ResponseTemplate::with_sources("see manual", vec![SourceRef::new("other.pdf", 1)]),
        ));
        let err = DomainRegistry::new(profiles).unwrap_err();
        assert!(err.to_string().contains("unknown document"));
    }
}
