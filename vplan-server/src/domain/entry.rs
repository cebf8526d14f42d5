//! Substitution-plan entries.

use std::fmt;

use serde::Serialize;

/// Classification of a plan line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// No cancellation or substitution keyword found
    Normal,
    /// Lesson does not take place (including self-directed work)
    Cancelled,
    /// Lesson is covered by someone else or moved
    Substitute,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Normal => "normal",
            Status::Cancelled => "cancelled",
            Status::Substitute => "substitute",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One plan line that concerns the queried class or teacher.
///
/// Ids are 1-based and only unique within the result of a single parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub id: usize,

    /// Normalized class query, identical on every entry of one parse
    pub class: String,

    /// The trimmed source line
    pub raw: String,

    /// All class-like codes on the line, comma separated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentioned_classes: Option<String>,

    /// Period or period range, e.g. "3" or "5-6"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson: Option<String>,

    pub status: Status,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Full subject name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> Entry {
        Entry {
            id: 1,
            class: "11D".into(),
            raw: "3 MA Hr. Müller 01.02.03 ENTFÄLLT 11D".into(),
            mentioned_classes: Some("11D".into()),
            lesson: Some("3".into()),
            status: Status::Cancelled,
            note: Some("Unterricht entfällt".into()),
            subject: Some("Mathematik".into()),
            room: Some("01.02.03".into()),
            teacher: Some("Hr. Müller".into()),
        }
    }

    #[test]
    fn status_display() {
        assert_eq!(Status::Normal.to_string(), "normal");
        assert_eq!(Status::Cancelled.to_string(), "cancelled");
        assert_eq!(Status::Substitute.to_string(), "substitute");
    }

    #[test]
    fn serializes_wire_keys() {
        let json = serde_json::to_value(entry()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["class"], "11D");
        assert_eq!(json["mentioned_classes"], "11D");
        assert_eq!(json["status"], "cancelled");
        assert_eq!(json["teacher"], "Hr. Müller");
    }

    #[test]
    fn omits_absent_fields() {
        let e = Entry {
            mentioned_classes: None,
            lesson: None,
            status: Status::Normal,
            note: None,
            subject: None,
            room: None,
            teacher: None,
            ..entry()
        };
        let json = serde_json::to_value(e).unwrap();
        let obj = json.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["class", "id", "raw", "status"]);
    }
}
