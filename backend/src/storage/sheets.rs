//! # Published Google Sheet access
//!
//! Reads a tab of a publicly shared spreadsheet through the Visualization
//! query endpoint (`/gviz/tq?tqx=out:json`). The endpoint answers with a
//! JavaScript callback rather than bare JSON:
//!
//! ```text
//! /*O_o*/
//! google.visualization.Query.setResponse({"version":"0.6","status":"ok","table":{...}});
//! ```
//!
//! so the payload is cut out of the `setResponse(...)` call before decoding.
//! Each row is `{"c": [cell | null, ...]}` and each cell `{"v": raw, "f": display}`.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::domain::models::cell::{Cell, CellValue, Row};
use super::error::SheetError;
use super::traits::SheetSource;

const CALLBACK_PREFIX: &str = "setResponse(";

#[derive(Debug, Deserialize)]
struct GvizResponse {
    status: Option<String>,
    #[serde(default)]
    errors: Vec<GvizError>,
    table: Option<GvizTable>,
}

#[derive(Debug, Deserialize)]
struct GvizError {
    reason: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GvizTable {
    #[serde(default)]
    rows: Vec<GvizRow>,
}

#[derive(Debug, Deserialize)]
struct GvizRow {
    #[serde(default)]
    c: Vec<Option<GvizCell>>,
}

#[derive(Debug, Deserialize)]
struct GvizCell {
    #[serde(default)]
    v: Option<Value>,
    #[serde(default)]
    f: Option<String>,
}

impl From<GvizCell> for Cell {
    fn from(cell: GvizCell) -> Self {
        let value = match cell.v {
            None | Some(Value::Null) => None,
            Some(Value::Number(n)) => n.as_f64().map(CellValue::Number),
            Some(Value::String(s)) => Some(CellValue::Text(s)),
            Some(Value::Bool(b)) => Some(CellValue::Bool(b)),
            Some(other) => Some(CellValue::Text(other.to_string())),
        };
        Cell {
            value,
            formatted: cell.f,
        }
    }
}

/// Cut the JSON object out of a `setResponse(...)` callback.
///
/// A body that is already bare JSON is returned unchanged.
pub fn unwrap_envelope(body: &str) -> Result<&str, SheetError> {
    let trimmed = body.trim();
    if trimmed.starts_with('{') {
        return Ok(trimmed);
    }
    let start = trimmed
        .find(CALLBACK_PREFIX)
        .map(|index| index + CALLBACK_PREFIX.len())
        .ok_or(SheetError::Envelope)?;
    let end = trimmed.rfind(')').ok_or(SheetError::Envelope)?;
    if end < start {
        return Err(SheetError::Envelope);
    }
    Ok(&trimmed[start..end])
}

/// Decode a full endpoint response body into rows
pub fn parse_response(body: &str) -> Result<Vec<Row>, SheetError> {
    let payload = unwrap_envelope(body)?;
    let response: GvizResponse = serde_json::from_str(payload)?;

    if response.status.as_deref() == Some("error") {
        let message = response
            .errors
            .into_iter()
            .filter_map(|e| e.message.or(e.reason))
            .collect::<Vec<_>>()
            .join("; ");
        return Err(SheetError::Query(message));
    }

    let rows = response
        .table
        .map(|table| table.rows)
        .unwrap_or_default()
        .into_iter()
        .map(|row| row.c.into_iter().map(|cell| cell.map(Cell::from)).collect())
        .collect();
    Ok(rows)
}

/// [`SheetSource`] backed by a publicly shared Google spreadsheet
#[derive(Clone)]
pub struct GvizSheetSource {
    http_client: HttpClient,
    spreadsheet_id: String,
    base_url: String,
}

impl GvizSheetSource {
    const DEFAULT_BASE_URL: &'static str = "https://docs.google.com/spreadsheets/d";

    pub fn new(spreadsheet_id: impl Into<String>) -> Self {
        Self::with_base_url(spreadsheet_id, Self::DEFAULT_BASE_URL)
    }

    /// Point the client at another host (for testing)
    pub fn with_base_url(spreadsheet_id: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            spreadsheet_id: spreadsheet_id.into(),
            base_url: base_url.into(),
        }
    }

    pub fn query_url(&self) -> String {
        format!(
            "{}/{}/gviz/tq",
            self.base_url.trim_end_matches('/'),
            self.spreadsheet_id
        )
    }
}

#[async_trait]
impl SheetSource for GvizSheetSource {
    async fn fetch_rows(&self, partition: &str) -> Result<Vec<Row>, SheetError> {
        let url = self.query_url();
        debug!("Fetching sheet '{}' from {}", partition, url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("tqx", "out:json"), ("sheet", partition)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let rows = parse_response(&body)?;
        debug!("Sheet '{}' returned {} rows", partition, rows.len());
        Ok(rows)
    }
}
