//! Class identifier (grade + section letter) type.

use std::fmt;

/// A class query split into grade and section letter.
///
/// Standard class codes are a grade (digits, or `Q` followed by digits) and an
/// optional single section letter, e.g. "11D", "8", "Q1", "Q2B".
///
/// Anything else is still accepted: the whole string becomes the grade and the
/// letter stays empty. Such identifiers can only be found by exact substring
/// matching, since grouped notations need a known letter.
///
/// # Examples
///
/// ```
/// use vplan_server::domain::ClassIdentifier;
///
/// let id = ClassIdentifier::parse(" 11d ");
/// assert_eq!(id.grade(), "11");
/// assert_eq!(id.letter(), Some('D'));
/// assert_eq!(id.as_str(), "11D");
///
/// // Non-standard codes fall back to the whole string
/// let id = ClassIdentifier::parse("Sport-AG");
/// assert_eq!(id.grade(), "SPORT-AG");
/// assert_eq!(id.letter(), None);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ClassIdentifier {
    normalized: String,
    grade: String,
    letter: Option<char>,
    structured: bool,
}

impl ClassIdentifier {
    /// Normalize a class query. Never fails.
    pub fn parse(s: &str) -> Self {
        let normalized = s.trim().to_uppercase();

        match split_structured(&normalized) {
            Some((grade, letter)) => Self {
                grade: grade.to_string(),
                letter,
                structured: true,
                normalized,
            },
            None => Self {
                grade: normalized.clone(),
                letter: None,
                structured: false,
                normalized,
            },
        }
    }

    /// The trimmed, upper-cased query string.
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// The grade part ("11", "Q1"), or the whole string for non-standard codes.
    pub fn grade(&self) -> &str {
        &self.grade
    }

    /// The section letter, if the query had one.
    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    /// Whether the query parsed into the grade/letter structure.
    pub fn is_structured(&self) -> bool {
        self.structured
    }
}

/// Split "11D" into ("11", Some('D')), "Q1" into ("Q1", None).
fn split_structured(s: &str) -> Option<(&str, Option<char>)> {
    let (grade, letter) = match s.char_indices().last() {
        Some((idx, c)) if c.is_ascii_uppercase() && idx > 0 => (&s[..idx], Some(c)),
        _ => (s, None),
    };

    is_grade(grade).then_some((grade, letter))
}

/// One or more digits, optionally prefixed by `Q`.
fn is_grade(s: &str) -> bool {
    let digits = s.strip_prefix('Q').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Debug for ClassIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.letter {
            Some(letter) => write!(f, "ClassIdentifier({}+{})", self.grade, letter),
            None => write!(f, "ClassIdentifier({})", self.grade),
        }
    }
}

impl fmt::Display for ClassIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}
