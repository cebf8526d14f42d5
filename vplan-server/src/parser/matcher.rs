//! Deciding whether a plan line concerns the queried class or teacher.
//!
//! Class codes on the plan come in three shapes:
//! - the plain code ("11D"), found by substring search
//! - dot notation ("11A.."), meaning every lettered class of the grade
//! - grouped letters ("11ABCD"), meaning each listed section
//!
//! The methods are tried in that order and the first hit wins.

use std::fmt;

use regex::Regex;

use crate::domain::ClassIdentifier;

/// Lines shorter than this (in characters) are never considered.
pub const MIN_LINE_CHARS: usize = 5;

/// Which method matched the class, with the token that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassMatch {
    /// The normalized class code occurs verbatim
    Exact,
    /// A dot-notation token for the class's grade, e.g. "11A.."
    DotNotation(String),
    /// A grouped token listing the class's letter, e.g. "11ABCD"
    MultiClass(String),
}

/// Outcome of matching one line. Only lives until the inclusion decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    pub class: Option<ClassMatch>,
    pub teacher: bool,
}

impl LineMatch {
    pub fn class_matched(&self) -> bool {
        self.class.is_some()
    }

    pub fn teacher_matched(&self) -> bool {
        self.teacher
    }
}

/// Human-readable reason, for log output only.
impl fmt::Display for LineMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.class {
            Some(ClassMatch::Exact) => f.write_str("exact")?,
            Some(ClassMatch::DotNotation(token)) => write!(f, "dot notation: {token}")?,
            Some(ClassMatch::MultiClass(token)) => write!(f, "multi-class: {token}")?,
            None => {}
        }
        match (self.class.is_some(), self.teacher) {
            (true, true) => f.write_str(" + teacher"),
            (false, true) => f.write_str("teacher (another course)"),
            (_, false) => Ok(()),
        }
    }
}

/// Matches lines against one class query and an optional teacher name.
///
/// Grade-dependent patterns are compiled once here and reused for every line
/// of a parse.
#[derive(Debug)]
pub struct LineMatcher<'a> {
    class: &'a ClassIdentifier,
    teacher_upper: Option<String>,
    dot_notation: Option<Regex>,
    multi_class: Option<Regex>,
}

impl<'a> LineMatcher<'a> {
    /// Build a matcher. A blank teacher name counts as no teacher.
    ///
    /// Dot notation and grouped letters are only checked when the class has
    /// a section letter.
    pub fn new(class: &'a ClassIdentifier, teacher: Option<&str>) -> Self {
        let teacher_upper = teacher
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_uppercase);

        let (dot_notation, multi_class) = if class.letter().is_some() {
            let grade = regex::escape(class.grade());
            (
                Regex::new(&format!(r"\b{grade}[A-Z]+\.{{2,}}")).ok(),
                Regex::new(&format!(r"\b{grade}[A-Z]{{2,}}\b")).ok(),
            )
        } else {
            (None, None)
        };

        Self {
            class,
            teacher_upper,
            dot_notation,
            multi_class,
        }
    }

    /// Whether a teacher name is part of the query.
    pub fn has_teacher(&self) -> bool {
        self.teacher_upper.is_some()
    }

    /// Match an upper-cased, trimmed line.
    pub fn match_line(&self, line_upper: &str) -> LineMatch {
        let teacher = self
            .teacher_upper
            .as_deref()
            .is_some_and(|t| line_upper.contains(t));

        LineMatch {
            class: self.match_class(line_upper),
            teacher,
        }
    }

    fn match_class(&self, line_upper: &str) -> Option<ClassMatch> {
        if line_upper.contains(self.class.as_str()) {
            return Some(ClassMatch::Exact);
        }

        let letter = self.class.letter()?;

        if let Some(m) = self.dot_notation.as_ref().and_then(|re| re.find(line_upper)) {
            return Some(ClassMatch::DotNotation(m.as_str().to_string()));
        }

        let grade_len = self.class.grade().len();
        self.multi_class.as_ref().and_then(|re| {
            re.find_iter(line_upper)
                .find(|m| m.as_str()[grade_len..].contains(letter))
                .map(|m| ClassMatch::MultiClass(m.as_str().to_string()))
        })
    }

    /// Inclusion decision.
    ///
    /// With a teacher in the query only teacher hits count, whether or not the
    /// class matched too. Without one, a class hit is required.
    pub fn includes(&self, m: &LineMatch) -> bool {
        if self.has_teacher() {
            m.teacher_matched()
        } else {
            m.class_matched()
        }
    }
}

/// Lines that are empty or too short to carry a plan row are skipped.
pub fn passes_prefilter(line: &str) -> bool {
    line.chars().count() >= MIN_LINE_CHARS
}
