//! Runtime configuration.
//!
//! Defaults describe the club's published sheet and a local server. A `.env`
//! file and the process environment can override them:
//!
//! | Variable             | Default                 |
//! |----------------------|-------------------------|
//! | `KAS_SPREADSHEET_ID` | the club ledger sheet   |
//! | `KAS_BIND_ADDR`      | `127.0.0.1:3000`        |
//! | `KAS_DATA_DIR`       | `./data`                |
//! | `KAS_CORS_ORIGIN`    | `http://localhost:8080` |

use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::domain::ledger_filter::DEFAULT_PAGE_SIZE;

pub const DEFAULT_SPREADSHEET_ID: &str = "1YaJcIfl8r0XLxK8dm8nkcucgGNJnwG7Ra7i-U04q_TA";
pub const RECORDS_SHEET: &str = "List";
pub const TOTAL_SHEET: &str = "Total";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub spreadsheet_id: String,
    pub records_sheet: String,
    pub total_sheet: String,
    pub bind_addr: SocketAddr,
    pub data_dir: PathBuf,
    pub cors_origin: String,
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: DEFAULT_SPREADSHEET_ID.to_string(),
            records_sheet: RECORDS_SHEET.to_string(),
            total_sheet: TOTAL_SHEET.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            data_dir: PathBuf::from("data"),
            cors_origin: "http://localhost:8080".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    /// Defaults, then `.env`, then the process environment
    pub fn from_env() -> Self {
        if let Ok(path) = dotenv::dotenv() {
            info!("Loaded environment from {}", path.display());
        }
        let mut config = Self::default();
        config.apply_overrides(|name| std::env::var(name).ok());
        config
    }

    /// Apply overrides from `lookup`; unusable values are logged and skipped
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(id) = lookup("KAS_SPREADSHEET_ID") {
            self.spreadsheet_id = id;
        }
        if let Some(addr) = lookup("KAS_BIND_ADDR") {
            match addr.parse::<SocketAddr>() {
                Ok(parsed) => self.bind_addr = parsed,
                Err(e) => warn!("Ignoring KAS_BIND_ADDR={:?}: {}", addr, e),
            }
        }
        if let Some(dir) = lookup("KAS_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(origin) = lookup("KAS_CORS_ORIGIN") {
            self.cors_origin = origin;
        }
    }
}
