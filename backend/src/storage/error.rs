//! Errors raised by the storage layer.

use thiserror::Error;

/// Failure to read rows from a [`SheetSource`](super::traits::SheetSource)
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("request to sheet failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("sheet endpoint returned HTTP {0}")]
    Status(u16),
    #[error("sheet response is not a setResponse(...) payload")]
    Envelope,
    #[error("sheet payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("sheet query failed: {0}")]
    Query(String),
}
