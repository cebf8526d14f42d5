//! School subject abbreviations.

/// Abbreviation → full subject name, as printed on the plan.
const SUBJECTS: &[(&str, &str)] = &[
    ("MA", "Mathematik"),
    ("DE", "Deutsch"),
    ("EN", "Englisch"),
    ("FR", "Französisch"),
    ("SP", "Spanisch"),
    ("LA", "Latein"),
    ("PH", "Physik"),
    ("CH", "Chemie"),
    ("BI", "Biologie"),
    ("GE", "Geschichte"),
    ("EK", "Erdkunde"),
    ("PO", "Politik"),
    ("RE", "Religion"),
    ("ET", "Ethik"),
    ("IF", "Informatik"),
    ("WI", "Wirtschaft"),
    ("MU", "Musik"),
    ("KU", "Kunst"),
    ("SPO", "Sport"),
    ("RU", "Religion"),
];

/// Look up the full name for an upper-case abbreviation.
///
/// ```
/// use vplan_server::domain::subject_name;
///
/// assert_eq!(subject_name("MA"), Some("Mathematik"));
/// assert_eq!(subject_name("ma"), None);
/// ```
pub fn subject_name(abbreviation: &str) -> Option<&'static str> {
    SUBJECTS
        .iter()
        .find(|(abbr, _)| *abbr == abbreviation)
        .map(|(_, name)| *name)
}

/// Whether any abbreviation occurs inside `upper` (an upper-cased token).
pub fn contains_abbreviation(upper: &str) -> bool {
    SUBJECTS.iter().any(|(abbr, _)| upper.contains(abbr))
}
