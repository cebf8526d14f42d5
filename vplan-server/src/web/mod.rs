//! Web layer for the substitution-plan checker.
//!
//! Provides the JSON API used by the front end: a plan check endpoint, a
//! health check and an index.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
