//! # Storage Module
//!
//! Everything that talks to the outside world on behalf of the domain:
//!
//! - **sheets**: the published spreadsheet the ledger lives in (read only)
//! - **json_file_store** / **memory**: key-value persistence for the scoreboard
//! - **snapshot**: the on-disk shape of a saved match
//! - **error**: errors shared by the storage traits
//!
//! The domain only sees the traits in [`traits`], so tests swap in the
//! in-memory implementations.

pub mod error;
pub mod json_file_store;
pub mod memory;
pub mod sheets;
pub mod snapshot;
pub mod traits;

pub use error::SheetError;
pub use json_file_store::JsonFileStore;
pub use memory::{InMemorySheetSource, InMemoryStore};
pub use sheets::GvizSheetSource;
pub use traits::{KeyValueStore, SheetSource};
