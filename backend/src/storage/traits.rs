//! # Storage Traits
//!
//! Abstractions over the two external collaborators so services can be
//! tested without network or disk.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::cell::Row;
use super::error::SheetError;

/// Read-only access to a spreadsheet split into named partitions (tabs)
#[async_trait]
pub trait SheetSource: Send + Sync {
    /// All rows of `partition` in sheet order, header row included
    async fn fetch_rows(&self, partition: &str) -> Result<Vec<Row>, SheetError>;
}

/// Synchronous string key-value persistence.
///
/// Writes overwrite the whole value; last write wins.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}
