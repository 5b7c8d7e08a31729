//! Event payload classification
//!
//! Webhook payloads are loosely typed. The only thing we care about is
//! whether the event is about an issue or a pull request, and its number.

use serde_json::Value;

/// What the triggering event payload describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// Payload carries an `issue` object
    Issue {
        /// Issue number
        number: u64,
    },
    /// Payload carries a `pull_request` object
    PullRequest {
        /// Pull request number
        number: u64,
    },
    /// Neither (push, schedule, workflow_dispatch, ...)
    Other,
}

impl PayloadKind {
    /// Classify a raw event payload.
    ///
    /// `issue` and `pull_request` are checked independently and in that
    /// order; when both are present the pull request wins.
    pub fn classify(payload: &Value) -> Self {
        let mut kind = PayloadKind::Other;

        if let Some(number) = object_number(payload, "issue") {
            kind = PayloadKind::Issue { number };
        }
        if let Some(number) = object_number(payload, "pull_request") {
            kind = PayloadKind::PullRequest { number };
        }

        kind
    }

    /// Issue or pull request number, if any
    #[inline]
    pub const fn number(&self) -> Option<u64> {
        match self {
            PayloadKind::Issue { number } | PayloadKind::PullRequest { number } => Some(*number),
            PayloadKind::Other => None,
        }
    }

    /// Path segment under the repository URL (`issues` or `pull`)
    #[inline]
    pub const fn path_segment(&self) -> Option<&'static str> {
        match self {
            PayloadKind::Issue { .. } => Some("issues"),
            PayloadKind::PullRequest { .. } => Some("pull"),
            PayloadKind::Other => None,
        }
    }
}

/// `payload[key].number` when `payload[key]` is a non-null object
fn object_number(payload: &Value, key: &str) -> Option<u64> {
    payload
        .get(key)
        .and_then(Value::as_object)
        .and_then(|obj| obj.get("number"))
        .and_then(Value::as_u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_issue() {
        let payload = json!({"action": "opened", "issue": {"number": 42}});
        assert_eq!(
            PayloadKind::classify(&payload),
            PayloadKind::Issue { number: 42 }
        );
    }

    #[test]
    fn test_classify_pull_request() {
        let payload = json!({"pull_request": {"number": 7, "title": "fix"}});
        let kind = PayloadKind::classify(&payload);
        assert_eq!(kind, PayloadKind::PullRequest { number: 7 });
        assert_eq!(kind.number(), Some(7));
        assert_eq!(kind.path_segment(), Some("pull"));
    }

    #[test]
    fn test_classify_push_is_other() {
        let payload = json!({"ref": "refs/heads/main", "commits": []});
        let kind = PayloadKind::classify(&payload);
        assert_eq!(kind, PayloadKind::Other);
        assert_eq!(kind.number(), None);
        assert_eq!(kind.path_segment(), None);
    }

    #[test]
    fn test_classify_null_and_non_object_fields() {
        assert_eq!(
            PayloadKind::classify(&json!({"issue": null})),
            PayloadKind::Other
        );
        assert_eq!(
            PayloadKind::classify(&json!({"pull_request": 12})),
            PayloadKind::Other
        );
        assert_eq!(PayloadKind::classify(&json!([])), PayloadKind::Other);
        assert_eq!(PayloadKind::classify(&Value::Null), PayloadKind::Other);
    }

    #[test]
    fn test_classify_object_without_number() {
        let payload = json!({"issue": {"title": "no number"}});
        assert_eq!(PayloadKind::classify(&payload), PayloadKind::Other);
    }

    // GitHub never sends both; the pull request still takes precedence.
    #[test]
    fn test_classify_both_prefers_pull_request() {
        let payload = json!({
            "issue": {"number": 1},
            "pull_request": {"number": 2}
        });
        assert_eq!(
            PayloadKind::classify(&payload),
            PayloadKind::PullRequest { number: 2 }
        );
    }

    #[test]
    fn test_issue_survives_invalid_pull_request() {
        let payload = json!({
            "issue": {"number": 5},
            "pull_request": null
        });
        assert_eq!(
            PayloadKind::classify(&payload),
            PayloadKind::Issue { number: 5 }
        );
    }
}
