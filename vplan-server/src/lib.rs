//! Substitution plan checker.
//!
//! Downloads the school's daily substitution plan ("Vertretungsplan") PDF,
//! extracts its text and answers: "which lines of today's plan concern my
//! class, or my teacher?"

pub mod cache;
pub mod config;
pub mod domain;
pub mod extract;
pub mod iserv;
pub mod parser;
pub mod plan;
pub mod web;
