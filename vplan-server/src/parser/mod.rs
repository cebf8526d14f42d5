//! Substitution-plan text parser.
//!
//! Turns the plain text of a plan document into [`Entry`] values for one
//! class query and an optional teacher name. The text has no fixed columns,
//! so every line is matched and split by token shape:
//!
//! 1. [`matcher`] decides whether a line concerns the class or teacher
//! 2. [`fields`] pulls lesson, status, subject, room and teacher out of it
//!
//! Parsing is a pure function of its inputs. Ids restart at 1 on every call.

pub mod fields;
pub mod matcher;
pub mod status;

use tracing::{debug, info};

use crate::domain::{ClassIdentifier, Entry};

use self::fields::extract_fields;
use self::matcher::{LineMatcher, passes_prefilter};

pub use self::matcher::{ClassMatch, LineMatch};
pub use self::status::{STATUS_RULES, StatusRule};

/// Parse plan text into entries for `class_query` and optional `teacher_query`.
///
/// Entries keep source-line order. Duplicate lines give duplicate entries.
///
/// ```
/// use vplan_server::domain::Status;
/// use vplan_server::parser::parse;
///
/// let text = "Vertretungsplan\n3 MA Hr. Müller 01.02.03 ENTFÄLLT 11D\n4 DE 10A";
/// let entries = parse(text, "11d", None);
///
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].id, 1);
/// assert_eq!(entries[0].status, Status::Cancelled);
/// assert_eq!(entries[0].teacher.as_deref(), Some("Hr. Müller"));
/// ```
pub fn parse(text: &str, class_query: &str, teacher_query: Option<&str>) -> Vec<Entry> {
    let class = ClassIdentifier::parse(class_query);
    let matcher = LineMatcher::new(&class, teacher_query);

    debug!(
        class = class.as_str(),
        grade = class.grade(),
        letter = ?class.letter(),
        teacher = ?teacher_query,
        "parsing plan text"
    );

    let mut entries = Vec::new();

    for (line_no, line) in text.split('\n').enumerate() {
        let line = line.trim();
        if !passes_prefilter(line) {
            continue;
        }

        let line_upper = line.to_uppercase();
        let found = matcher.match_line(&line_upper);
        if !matcher.includes(&found) {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 2 {
            continue;
        }

        let fields = extract_fields(&line_upper, &tokens);
        let entry = Entry {
            id: entries.len() + 1,
            class: class.as_str().to_string(),
            raw: line.to_string(),
            mentioned_classes: fields.mentioned_classes,
            lesson: fields.lesson,
            status: fields.status,
            note: fields.note.map(str::to_string),
            subject: fields.subject.map(str::to_string),
            room: fields.room,
            teacher: fields.teacher,
        };

        debug!(
            line = line_no,
            reason = %found,
            lesson = ?entry.lesson,
            subject = ?entry.subject,
            status = %entry.status,
            teacher = ?entry.teacher,
            "matched line"
        );

        entries.push(entry);
    }

    info!(
        class = class.as_str(),
        entries = entries.len(),
        "parsed plan text"
    );

    entries
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
