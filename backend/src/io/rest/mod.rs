//! # REST API Interface Layer
//!
//! Axum handlers grouped by resource. Each group exposes a `router()` that
//! the crate root mounts under `/api`.
//!
//! Data source failures never surface as HTTP errors: the domain already
//! degrades them to empty results. Only malformed request input is answered
//! with `400 Bad Request`.

pub mod dashboard_apis;
pub mod mappers;
pub mod records_apis;
pub mod scoreboard_apis;
