//! # Domain Module
//!
//! Business logic for the club cash ledger and the scoreboard, independent
//! of HTTP and of where the data lives.
//!
//! ## Module Organization
//!
//! - **currency**: parsing hand-typed Rupiah amounts and formatting them back
//! - **record_decoder**: spreadsheet rows to [`models::record::TransactionRecord`]
//! - **ledger_filter**: date ranges, totals and paging
//! - **record_table**: display formatting for ledger rows
//! - **ledger_service**: fetching the ledger and composing dashboard pages
//! - **scoreboard_service**: the persisted badminton scoreboard
//! - **models**: cells, records and the match state machine
//!
//! ## Failure Policy
//!
//! Nothing in here propagates a data problem to the user as an error: a
//! failed fetch is an empty ledger, a bad cell is a zero or empty field, and
//! a corrupt saved game is a fresh game. Each of these is logged.

pub mod commands;
pub mod currency;
pub mod ledger_filter;
pub mod ledger_service;
pub mod models;
pub mod record_decoder;
pub mod record_table;
pub mod scoreboard_service;

pub use ledger_service::*;
pub use record_table::*;
pub use scoreboard_service::*;
