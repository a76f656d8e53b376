//! Domain models: which context a session answers questions about.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{Result, ShioriError};
use crate::rule::{Attachment, Rule};
use crate::session::Stage;

/// Identifier of an answering context.
///
/// The set is closed: one implicit knowledge base plus one domain per bundled
/// dataset file. Discriminants are explicit because the registry indexes its
/// profiles by them.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DomainId {
    #[default]
    KnowledgeBase = 0,
    Sales = 1,
    Inventory = 2,
    Customers = 3,
    Marketing = 4,
}

impl DomainId {
    /// Number of domains in the closed set.
    pub const COUNT: usize = 5;

    /// Parses a kebab-case domain id (`knowledge-base`, `sales`, ...).
    pub fn parse(value: &str) -> Result<Self> {
        value
            .trim()
            .parse()
            .map_err(|_| ShioriError::not_found("domain", value))
    }

    /// Position of this domain in registry order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// All domains in registry order.
    pub fn all() -> impl Iterator<Item = DomainId> {
        Self::iter()
    }
}

/// What kind of source a domain answers from. Decides the processing stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainKind {
    /// Internal documents; answers carry page citations.
    KnowledgeBase,
    /// A bundled data file; answers carry a chart selector.
    Dataset { file_name: String },
}

impl DomainKind {
    /// Processing stages a submission walks through, in order.
    pub fn stage_plan(&self) -> &'static [Stage] {
        match self {
            DomainKind::KnowledgeBase => &[Stage::Searching, Stage::Generating],
            DomainKind::Dataset { .. } => &[Stage::Loading],
        }
    }
}

/// Answer used when no rule of the domain matches.
///
/// `body` is a minijinja template. It may refer to `{{ question }}`, which is
/// bound to the trimmed question text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fallback {
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
}

impl Fallback {
    pub fn new(body: impl Into<String>, attachment: Option<Attachment>) -> Self {
        Self {
            body: body.into(),
            attachment,
        }
    }
}

/// An indexed knowledge-base document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    pub name: String,
    pub pages: u32,
    /// Upload date as shown to users (`YYYY/MM/DD`).
    pub uploaded_at: String,
}

impl DocumentEntry {
    pub fn new(name: impl Into<String>, pages: u32, uploaded_at: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pages,
            uploaded_at: uploaded_at.into(),
        }
    }
}

/// Everything the registry knows about one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainProfile {
    pub id: DomainId,
    /// Human-readable title.
    pub title: String,
    pub kind: DomainKind,
    /// Ordered rule table. First match wins.
    pub rules: Vec<Rule>,
    pub fallback: Fallback,
    /// Example questions offered on an empty session.
    #[serde(default)]
    pub suggestions: Vec<String>,
    /// Documents the answers may cite. Empty for datasets.
    #[serde(default)]
    pub documents: Vec<DocumentEntry>,
}

impl DomainProfile {
    /// Total number of indexed pages across the document catalog.
    pub fn total_pages(&self) -> u32 {
        self.documents.iter().map(|d| d.pages).sum()
    }

    /// Looks up a catalogued document by file name.
    pub fn document(&self, name: &str) -> Option<&DocumentEntry> {
        self.documents.iter().find(|d| d.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_id_round_trip_names() {
        assert_eq!(DomainId::KnowledgeBase.to_string(), "knowledge-base");
        assert_eq!(DomainId::parse("sales").unwrap(), DomainId::Sales);
        assert_eq!(DomainId::parse(" marketing ").unwrap(), DomainId::Marketing);
    }

    #[test]
    fn test_default_domain_is_knowledge_base() {
        assert_eq!(DomainId::default(), DomainId::KnowledgeBase);
    }

    #[test]
    fn test_domain_id_parse_unknown() {
        let err = DomainId::parse("weather").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_domain_index_matches_iteration_order() {
        for (position, domain) in DomainId::all().enumerate() {
            assert_eq!(domain.index(), position);
        }
        assert_eq!(DomainId::all().count(), DomainId::COUNT);
    }

    #[test]
    fn test_stage_plans() {
        assert_eq!(
            DomainKind::KnowledgeBase.stage_plan(),
            &[Stage::Searching, Stage::Generating]
        );
        let dataset = DomainKind::Dataset {
            file_name: "sales_data.csv".to_string(),
        };
        assert_eq!(dataset.stage_plan(), &[Stage::Loading]);
    }
}
