//! Router fixtures for handler tests.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use crate::config::AppConfig;
use crate::domain::models::cell::{Cell, Row};
use crate::storage::{InMemorySheetSource, InMemoryStore};
use crate::{create_router, AppState};

fn ledger_row(no: f64, name: &str, actual: &str, paid: &str, difference: &str, date: &str) -> Row {
    vec![
        Some(Cell::number(no)),
        Some(Cell::text(name)),
        Some(Cell::number(1.0)),
        Some(Cell::text(actual)),
        Some(Cell::text(paid)),
        Some(Cell::text(difference)),
        Some(Cell::text(date)),
    ]
}

/// Three ledger rows and a total of Rp 150.000
pub fn club_sheet() -> InMemorySheetSource {
    let header: Row = ["No", "Pemain", "Bola", "Harga", "Bayar", "Selisih", "Tanggal"]
        .iter()
        .map(|title| Some(Cell::text(*title)))
        .collect();

    InMemorySheetSource::new()
        .with_partition(
            "List",
            vec![
                header,
                ledger_row(1.0, "Andi", "Rp 25.000", "Rp 25.000", "Rp 0", "Date(2024,10,30)"),
                ledger_row(2.0, "Budi", "Rp 18.000", "Rp 20.000", "Rp 2.000", "Date(2024,11,1)"),
                ledger_row(3.0, "Cici", "Rp 20.000", "Rp 19.500", "-Rp 500", "Date(2024,11,2)"),
            ],
        )
        .with_partition(
            "Total",
            vec![
                vec![Some(Cell::text("Kas")), None],
                vec![Some(Cell::text("Total")), Some(Cell::formatted("Rp 150.000"))],
            ],
        )
}

fn app_with(source: InMemorySheetSource) -> Router {
    let config = AppConfig::default();
    let state = AppState::new(Arc::new(source), Arc::new(InMemoryStore::new()), &config);
    create_router(state, &config.cors_origin).unwrap()
}

pub fn test_app() -> Router {
    app_with(club_sheet())
}

/// Every sheet query fails
pub fn test_app_without_sheet() -> Router {
    app_with(InMemorySheetSource::new())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post(app: Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}
