use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::commands::dashboard::DashboardQuery;
use crate::domain::ledger_filter::DateRange;
use crate::io::rest::mappers::dashboard_mapper::DashboardMapper;
use crate::AppState;

// Query parameters for the dashboard API
#[derive(Debug, Deserialize)]
pub struct DashboardParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub page: Option<usize>,
}

/// Create a router for the dashboard view
pub fn router() -> Router<AppState> {
    Router::new().route("/dashboard", get(get_dashboard))
}

fn parse_day(name: &str, value: Option<&str>) -> Result<Option<NaiveDate>, String> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| format!("Invalid '{}' date {:?}, expected YYYY-MM-DD", name, raw)),
    }
}

/// One page of the ledger filtered by an optional inclusive date range
async fn get_dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> impl IntoResponse {
    info!("GET /api/dashboard - query: {:?}", params);

    let range = match (
        parse_day("from", params.from.as_deref()),
        parse_day("to", params.to.as_deref()),
    ) {
        (Ok(from), Ok(to)) => DateRange::new(from, to),
        (Err(message), _) | (_, Err(message)) => {
            warn!("Rejected dashboard query: {}", message);
            return (StatusCode::BAD_REQUEST, message).into_response();
        }
    };

    let query = DashboardQuery {
        range,
        page: params.page.unwrap_or(1),
    };
    let today = Local::now().date_naive();
    let page = state.ledger_service.dashboard(query, today).await;

    (
        StatusCode::OK,
        Json(DashboardMapper::to_dto(page, &state.record_table_service)),
    )
        .into_response()
}
