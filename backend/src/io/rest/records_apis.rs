use axum::{extract::State, response::Json, routing::get, Router};
use tracing::info;

use crate::io::rest::mappers::record_mapper::RecordMapper;
use crate::AppState;
use shared::{TotalResponse, TransactionRecord};

/// Routes for the raw ledger and the all-time total
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/records", get(get_records))
        .route("/total", get(get_total))
}

/// Every ledger record in sheet order
pub async fn get_records(State(state): State<AppState>) -> Json<Vec<TransactionRecord>> {
    info!("GET /api/records");
    let records = state.ledger_service.fetch_records().await;
    Json(records.into_iter().map(RecordMapper::to_dto).collect())
}

/// All-time cash total as reported by the summary sheet
pub async fn get_total(State(state): State<AppState>) -> Json<TotalResponse> {
    info!("GET /api/total");
    let total = state.ledger_service.fetch_all_time_total().await;
    Json(TotalResponse { total })
}
