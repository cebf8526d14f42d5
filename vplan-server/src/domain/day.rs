//! Which day's plan a request is about.

use chrono::{NaiveDate, TimeDelta};

/// Day selector of a plan request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlanDay {
    #[default]
    Today,
    Tomorrow,
}

impl PlanDay {
    /// Map a request selector to a day. Unknown selectors mean today.
    pub fn from_selector(selector: &str) -> Self {
        match selector.trim().to_ascii_lowercase().as_str() {
            "tomorrow" => PlanDay::Tomorrow,
            _ => PlanDay::Today,
        }
    }

    /// Days after today.
    pub fn offset_days(&self) -> i64 {
        match self {
            PlanDay::Today => 0,
            PlanDay::Tomorrow => 1,
        }
    }

    /// The plan date for this selector, counted from `today`.
    pub fn date_from(&self, today: NaiveDate) -> NaiveDate {
        today + TimeDelta::days(self.offset_days())
    }
}
