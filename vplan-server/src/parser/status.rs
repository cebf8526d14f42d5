//! Keyword rules for classifying a line's status.

use crate::domain::Status;

/// A status rule: if the upper-cased line contains any keyword, it gets
/// `status` and `note`.
#[derive(Debug, Clone, Copy)]
pub struct StatusRule {
    pub keywords: &'static [&'static str],
    pub status: Status,
    pub note: &'static str,
}

/// Rules in priority order. The first matching rule wins.
pub const STATUS_RULES: &[StatusRule] = &[
    StatusRule {
        keywords: &["ENTFÄLLT", "ENTFALL"],
        status: Status::Cancelled,
        note: "Unterricht entfällt",
    },
    StatusRule {
        keywords: &["FÄLLT AUS"],
        status: Status::Cancelled,
        note: "Fällt aus",
    },
    StatusRule {
        keywords: &["EVA"],
        status: Status::Cancelled,
        note: "EVA (self-directed work)",
    },
    StatusRule {
        keywords: &["VERTR", "VERTRETUNG"],
        status: Status::Substitute,
        note: "Vertretung",
    },
    StatusRule {
        keywords: &["VERLEGT", "VERLEGUNG"],
        status: Status::Substitute,
        note: "Stunde verlegt",
    },
];

impl StatusRule {
    fn matches(&self, line_upper: &str) -> bool {
        self.keywords.iter().any(|kw| line_upper.contains(kw))
    }
}

/// Classify an upper-cased line. Lines matching no rule are `Normal` with no note.
pub fn classify(line_upper: &str) -> (Status, Option<&'static str>) {
    STATUS_RULES
        .iter()
        .find(|rule| rule.matches(line_upper))
        .map_or((Status::Normal, None), |rule| (rule.status, Some(rule.note)))
}
