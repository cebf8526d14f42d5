//! IServ school-server access.
//!
//! The substitution plan is published on the school's IServ instance as one
//! PDF per day. Access needs the session cookies of a logged-in user; this
//! module reads those cookies and downloads the PDF for a date.

mod client;
mod cookies;
mod error;

pub use client::{PlanClient, PlanClientConfig};
pub use cookies::{COOKIE_ENV_VARS, CookieSource, Cookies};
pub use error::IservError;
