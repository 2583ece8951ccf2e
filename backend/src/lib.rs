//! # KAS Badminton Backend
//!
//! REST backend for the club cash ledger dashboard and the court scoreboard.
//!
//! ## Architecture
//!
//! - **domain**: parsing, filtering and the scoreboard state machine
//! - **storage**: the spreadsheet client and key-value persistence
//! - **io**: axum handlers and DTO mappers
//! - **config**: environment driven settings

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

#[cfg(test)]
mod test_utils;

use config::AppConfig;
use domain::{LedgerService, RecordTableService, ScoreboardService};
use io::rest::{dashboard_apis, records_apis, scoreboard_apis};
use storage::{GvizSheetSource, JsonFileStore, KeyValueStore, SheetSource};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub ledger_service: LedgerService,
    pub record_table_service: RecordTableService,
    pub scoreboard_service: ScoreboardService,
}

impl AppState {
    pub fn new(
        sheet_source: Arc<dyn SheetSource>,
        store: Arc<dyn KeyValueStore>,
        config: &AppConfig,
    ) -> Self {
        Self {
            ledger_service: LedgerService::new(
                sheet_source,
                config.records_sheet.clone(),
                config.total_sheet.clone(),
                config.page_size,
            ),
            record_table_service: RecordTableService::new(),
            scoreboard_service: ScoreboardService::load(store),
        }
    }
}

/// Wire the production spreadsheet client and the on-disk store
pub fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Reading ledger from spreadsheet {}", config.spreadsheet_id);
    let sheet_source = Arc::new(GvizSheetSource::new(config.spreadsheet_id.clone()));

    info!("Saving scoreboard under {}", config.data_dir.display());
    let store = Arc::new(JsonFileStore::new(&config.data_dir)?);

    Ok(AppState::new(sheet_source, store, config))
}

/// Build the `/api` router with CORS for the dashboard origin
pub fn create_router(state: AppState, cors_origin: &str) -> Result<Router> {
    let origin = cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("invalid CORS origin {:?}", cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let api_routes = Router::new()
        .merge(records_apis::router())
        .merge(dashboard_apis::router())
        .nest("/score", scoreboard_apis::router());

    Ok(Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(state))
}
