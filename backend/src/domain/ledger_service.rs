//! Ledger service: fetches the club ledger and composes dashboard pages.
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::domain::commands::dashboard::{DashboardPage, DashboardQuery};
use crate::domain::ledger_filter::LedgerView;
use crate::domain::models::record::TransactionRecord;
use crate::domain::record_decoder::{decode_rows, resolve_cell};
use crate::storage::SheetSource;

/// Summary tab cell holding the all-time total: sheet B3, which is row index 1
/// once the endpoint has consumed the header row
const TOTAL_ROW: usize = 1;
const TOTAL_COL: usize = 1;

#[derive(Clone)]
pub struct LedgerService {
    source: Arc<dyn SheetSource>,
    records_partition: String,
    total_partition: String,
    page_size: usize,
}

impl LedgerService {
    pub fn new(
        source: Arc<dyn SheetSource>,
        records_partition: impl Into<String>,
        total_partition: impl Into<String>,
        page_size: usize,
    ) -> Self {
        Self {
            source,
            records_partition: records_partition.into(),
            total_partition: total_partition.into(),
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Every ledger row in sheet order; empty when the sheet can't be read
    pub async fn fetch_records(&self) -> Vec<TransactionRecord> {
        match self.source.fetch_rows(&self.records_partition).await {
            Ok(rows) => {
                let records = decode_rows(&rows);
                info!("Loaded {} ledger records", records.len());
                records
            }
            Err(e) => {
                error!("Error fetching records: {}", e);
                Vec::new()
            }
        }
    }

    /// All-time cash total as computed by the sheet itself; 0 on failure
    pub async fn fetch_all_time_total(&self) -> f64 {
        match self.source.fetch_rows(&self.total_partition).await {
            Ok(rows) => {
                let cell = rows
                    .get(TOTAL_ROW)
                    .and_then(|row| row.get(TOTAL_COL))
                    .and_then(Option::as_ref);
                if cell.is_none() {
                    warn!("Total sheet has no value at row {}, column {}", TOTAL_ROW, TOTAL_COL);
                }
                resolve_cell(cell).as_amount()
            }
            Err(e) => {
                error!("Error fetching total value: {}", e);
                0.0
            }
        }
    }

    /// Fetch ledger and total concurrently and cut out the requested page
    pub async fn dashboard(&self, query: DashboardQuery, today: NaiveDate) -> DashboardPage {
        let (records, all_time_total) = tokio::join!(self.fetch_records(), self.fetch_all_time_total());
        self.build_page(&records, all_time_total, query, today)
    }

    pub fn build_page(
        &self,
        records: &[TransactionRecord],
        all_time_total: f64,
        query: DashboardQuery,
        today: NaiveDate,
    ) -> DashboardPage {
        let mut view = LedgerView::new(records.to_vec(), self.page_size);
        view.set_range(query.range);
        view.go_to_page(query.page);

        DashboardPage {
            records: view.current_page_records(),
            range: view.range(),
            page: view.current_page(),
            total_pages: view.total_pages(),
            page_size: view.page_size(),
            filtered_count: view.filtered().len(),
            total_count: view.records().len(),
            filtered_total: view.filtered_total(),
            today_total: view.today_total(today),
            all_time_total,
        }
    }
}
