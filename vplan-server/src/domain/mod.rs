//! Domain types for the substitution-plan checker.
//!
//! Class queries, plan days, plan entries and the subject abbreviation
//! table. These are plain values with no I/O; the parser builds them and the
//! web layer serializes them.

mod class_id;
mod day;
mod entry;
mod subject;

pub use class_id::ClassIdentifier;
pub use day::PlanDay;
pub use entry::{Entry, Status};
pub use subject::{contains_abbreviation, subject_name};
