//! Rule and response template models.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Visualization selected by a dataset answer.
///
/// The core only picks the tag; drawing the chart is up to the front end.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ChartKind {
    /// Monthly sales bar chart.
    SalesBar,
    /// Current stock per product against the reorder point.
    InventoryStock,
    /// Stock level trend over the last six months.
    InventoryTrend,
    /// Customer count per age bracket.
    CustomerAge,
    /// Customer share per region.
    CustomerRegion,
    /// ROI per marketing channel.
    MarketingRoi,
    /// Monthly conversion rate.
    MarketingConversion,
}

/// A single page citation backing a knowledge-base answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    /// Document file name, e.g. `就業規則.pdf`.
    pub document: String,
    /// 1-based page number.
    pub page: u32,
}

impl SourceRef {
    pub fn new(document: impl Into<String>, page: u32) -> Self {
        Self {
            document: document.into(),
            page,
        }
    }
}

/// The non-text payload of a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Attachment {
    /// A chart to draw next to the answer.
    Chart(ChartKind),
    /// Ordered citations; may be empty.
    Sources(Vec<SourceRef>),
}

impl Attachment {
    /// Returns the citations if this is a source list.
    pub fn sources(&self) -> Option<&[SourceRef]> {
        match self {
            Attachment::Sources(sources) => Some(sources),
            Attachment::Chart(_) => None,
        }
    }

    /// Returns the chart tag if this is a chart selector.
    pub fn chart(&self) -> Option<ChartKind> {
        match self {
            Attachment::Chart(kind) => Some(*kind),
            Attachment::Sources(_) => None,
        }
    }
}

/// A canned answer: markup body plus an optional attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseTemplate {
    /// Body text in the constrained markup subset (pipe tables, bold headings,
    /// numbered items, `※` notes).
    pub body: String,
    /// Chart selector or source list. `None` only for dataset fallbacks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
}

impl ResponseTemplate {
    pub fn new(body: impl Into<String>, attachment: Option<Attachment>) -> Self {
        Self {
            body: body.into(),
            attachment,
        }
    }

    /// Template answered with a chart.
    pub fn with_chart(body: impl Into<String>, chart: ChartKind) -> Self {
        Self::new(body, Some(Attachment::Chart(chart)))
    }

    /// Template answered with citations.
    pub fn with_sources(body: impl Into<String>, sources: Vec<SourceRef>) -> Self {
        Self::new(body, Some(Attachment::Sources(sources)))
    }
}

/// A keyword rule bound to a canned answer.
///
/// The rule matches when any of `keywords` occurs in the normalized question
/// and, if set, `required_keyword` occurs as well. Matching is plain substring
/// containment, so a keyword that happens to be part of an unrelated word will
/// also match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Stable identifier used in logs and rule listings.
    pub id: String,
    /// OR-combined keywords, stored normalized.
    pub keywords: Vec<String>,
    /// AND-combined keyword, stored normalized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_keyword: Option<String>,
    /// Answer returned when the rule matches.
    pub template: ResponseTemplate,
}

impl Rule {
    /// Creates a rule from raw keywords. Keywords are normalized with
    /// [`normalize`] so callers may write `ROI` or `roi` alike.
    pub fn new<I, S>(id: impl Into<String>, keywords: I, template: ResponseTemplate) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            id: id.into(),
            keywords: keywords
                .into_iter()
                .map(|k| normalize(k.as_ref()))
                .collect(),
            required_keyword: None,
            template,
        }
    }

    /// Adds an AND-combined keyword.
    pub fn requiring(mut self, keyword: impl AsRef<str>) -> Self {
        self.required_keyword = Some(normalize(keyword.as_ref()));
        self
    }

    /// Checks a question that has already been passed through [`normalize`].
    pub fn matches(&self, normalized_question: &str) -> bool {
        let any_keyword = self
            .keywords
            .iter()
            .any(|k| normalized_question.contains(k.as_str()));

        any_keyword
            && self
                .required_keyword
                .as_deref()
                .is_none_or(|k| normalized_question.contains(k))
    }
}

/// Lower-cases ASCII letters only.
///
/// Non-ASCII text (kana, kanji, full-width letters) is left untouched so
/// substring membership of mixed-script keywords does not change.
pub fn normalize(text: &str) -> String {
    text.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> ResponseTemplate {
        ResponseTemplate::with_chart("body", ChartKind::SalesBar)
    }

    #[test]
    fn test_normalize_only_touches_ascii() {
        assert_eq!(normalize("ROI を教えて"), "roi を教えて");
        // Full-width letters are not ASCII and stay as they are.
        assert_eq!(normalize("ＲＯＩ"), "ＲＯＩ");
    }

    #[test]
    fn test_rule_keywords_are_normalized() {
        let rule = Rule::new("r", ["ROI"], template());
        assert_eq!(rule.keywords, vec!["roi".to_string()]);
        assert!(rule.matches(&normalize("チャネル別のRoiは？")));
    }

    #[test]
    fn test_rule_or_keywords() {
        let rule = Rule::new("r", ["在庫", "発注"], template());
        assert!(rule.matches("発注が必要な製品"));
        assert!(rule.matches("在庫数"));
        assert!(!rule.matches("売上"));
    }

    #[test]
    fn test_rule_required_keyword() {
        let rule = Rule::new("r", ["比較", "増減"], template()).requiring("前月");
        assert!(rule.matches("前月との比較"));
        assert!(!rule.matches("昨年との比較"));
        // The required keyword alone is not enough.
        assert!(!rule.matches("前月の数字"));
    }

    #[test]
    fn test_substring_match_is_not_tokenized() {
        // "休み" also matches inside "夏休み明け"; accepted behaviour.
        let rule = Rule::new("r", ["休み"], template());
        assert!(rule.matches("夏休み明けの予定"));
    }

    #[test]
    fn test_attachment_serialization() {
        let json = serde_json::to_value(Attachment::Chart(ChartKind::MarketingRoi)).unwrap();
        assert_eq!(json["type"], "chart");
        assert_eq!(json["data"], "marketing-roi");
    }

    #[test]
    fn test_chart_kind_parse() {
        let kind: ChartKind = "inventory-trend".parse().unwrap();
        assert_eq!(kind, ChartKind::InventoryTrend);
        assert_eq!(kind.to_string(), "inventory-trend");
    }
}
