//! In-memory implementations of the storage traits.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::domain::models::cell::Row;
use super::error::SheetError;
use super::traits::{KeyValueStore, SheetSource};

/// Fixed spreadsheet content keyed by partition name.
///
/// Unknown partitions answer with a query error, like the real endpoint.
#[derive(Default)]
pub struct InMemorySheetSource {
    partitions: HashMap<String, Vec<Row>>,
}

impl InMemorySheetSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_partition(mut self, name: impl Into<String>, rows: Vec<Row>) -> Self {
        self.partitions.insert(name.into(), rows);
        self
    }
}

#[async_trait]
impl SheetSource for InMemorySheetSource {
    async fn fetch_rows(&self, partition: &str) -> Result<Vec<Row>, SheetError> {
        self.partitions
            .get(partition)
            .cloned()
            .ok_or_else(|| SheetError::Query(format!("Unable to parse range: {}", partition)))
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}
