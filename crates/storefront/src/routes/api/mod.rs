//! JSON/form API endpoints that fall outside the page routes.

pub mod language;
