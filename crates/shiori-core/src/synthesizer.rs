//! Response synthesis.

use serde::{Deserialize, Serialize};

use crate::rule::{Attachment, ResponseTemplate};

/// A typed answer ready to be appended as an assistant message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
}

/// Turns a classified template into a response.
///
/// Pure: the same template always yields an equal response. Ids and
/// timestamps are assigned when the response becomes a message.
pub fn synthesize(template: &ResponseTemplate) -> Response {
    Response {
        body: template.body.clone(),
        attachment: template.attachment.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::SourceRef;

    #[test]
    fn test_synthesize_is_deterministic() {
        let template =
            ResponseTemplate::with_sources("body", vec![SourceRef::new("就業規則.pdf", 12)]);
        let first = synthesize(&template);
        assert_eq!(first, synthesize(&template));
        assert_eq!(first.body, "body");
        assert_eq!(first.attachment, template.attachment);
    }
}
