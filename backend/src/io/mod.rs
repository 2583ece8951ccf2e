//! # IO Module
//!
//! The HTTP face of the backend. Handlers translate requests into domain
//! calls and domain results into the DTOs of the `shared` crate; they hold no
//! business rules of their own.
//!
//! ## Supported Operations
//!
//! - **GET /api/records**: every ledger record
//! - **GET /api/total**: the all-time cash total
//! - **GET /api/dashboard**: one filtered, formatted page of the ledger
//! - **GET /api/score**, **POST /api/score/point/:team**, **POST /api/score/undo**,
//!   **POST /api/score/reset**: the scoreboard

pub mod rest;

pub use rest::*;
