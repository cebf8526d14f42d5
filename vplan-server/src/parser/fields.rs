//! Field extraction from a matched plan line.
//!
//! Every field is independent and best-effort: a field that cannot be found is
//! left out, never an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{Status, contains_abbreviation, subject_name};

use super::status::classify;

/// Class-like codes: "11D", "11ABCD", "11A..", "Q1", "Q2B..".
static CLASS_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d+[A-Z]+(?:\.{1,2}|\b)|\bQ\d+[A-Z]*(?:\.{1,2}|\b)")
        .expect("class code pattern is valid")
});

/// Title words that introduce a teacher's surname.
const TITLES: &[&str] = &["Hr.", "Fr.", "Herr", "Frau"];

/// Punctuation stripped from tokens before subject lookup.
const SUBJECT_PUNCTUATION: &[char] = &['.', ',', ';', ':'];

/// Fields derived from one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFields {
    pub mentioned_classes: Option<String>,
    pub lesson: Option<String>,
    pub status: Status,
    pub note: Option<&'static str>,
    pub subject: Option<&'static str>,
    pub room: Option<String>,
    pub teacher: Option<String>,
}

/// Extract all fields from a line, its upper-cased form and its tokens.
pub fn extract_fields(line_upper: &str, tokens: &[&str]) -> LineFields {
    let (status, note) = classify(line_upper);

    LineFields {
        mentioned_classes: mentioned_classes(line_upper),
        lesson: lesson(tokens),
        status,
        note,
        subject: subject(tokens),
        room: room(tokens),
        teacher: teacher(tokens),
    }
}

/// All class-like codes in line order, joined with ", ".
pub fn mentioned_classes(line_upper: &str) -> Option<String> {
    let codes: Vec<&str> = CLASS_CODE
        .find_iter(line_upper)
        .map(|m| m.as_str())
        .collect();

    (!codes.is_empty()).then(|| codes.join(", "))
}

/// The first token, if it is a period ("3") or period range ("5-6").
pub fn lesson(tokens: &[&str]) -> Option<String> {
    let first = *tokens.first()?;

    let is_number = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    let valid = match first.split_once('-') {
        Some((from, to)) => is_number(from) && is_number(to),
        None => is_number(first),
    };

    valid.then(|| first.to_string())
}

/// The first token that is a known subject abbreviation.
pub fn subject(tokens: &[&str]) -> Option<&'static str> {
    tokens.iter().find_map(|token| {
        let upper = token.to_uppercase();
        subject_name(upper.trim_matches(SUBJECT_PUNCTUATION))
    })
}

/// The first token shaped like a room number, "01.02.03".
pub fn room(tokens: &[&str]) -> Option<String> {
    tokens
        .iter()
        .find(|token| is_room(token))
        .map(|token| token.to_string())
}

fn is_room(token: &str) -> bool {
    let bytes = token.as_bytes();

    bytes.len() == 8
        && bytes[2] == b'.'
        && bytes[5] == b'.'
        && [0, 1, 3, 4, 6, 7]
            .iter()
            .all(|&i| bytes[i].is_ascii_digit())
}

/// The teacher named on the line.
///
/// A title word followed by a name wins ("Hr. Müller"). Without one, the
/// first capitalized, not all-caps token longer than two characters that
/// does not contain a subject abbreviation is taken. This fallback can pick up
/// other proper-noun-shaped words.
pub fn teacher(tokens: &[&str]) -> Option<String> {
    let titled = tokens.windows(2).find_map(|pair| {
        TITLES
            .contains(&pair[0])
            .then(|| format!("{} {}", pair[0], pair[1]))
    });

    titled.or_else(|| {
        tokens
            .iter()
            .find(|token| is_name_like(token))
            .map(|token| token.to_string())
    })
}

fn is_name_like(token: &str) -> bool {
    token.chars().count() > 2
        && token.chars().next().is_some_and(char::is_uppercase)
        && !is_all_uppercase(token)
        && !contains_abbreviation(&token.to_uppercase())
}

/// True when the token has cased letters and none of them is lower case.
fn is_all_uppercase(token: &str) -> bool {
    token.chars().any(char::is_uppercase) && !token.chars().any(char::is_lowercase)
}
