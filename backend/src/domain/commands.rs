//! Domain-level query and result types.
//! These are used by services inside the domain layer and are **not** exposed
//! over the public API. The REST layer maps the DTOs in the `shared` crate to
//! and from these types.

pub mod dashboard {
    use crate::domain::ledger_filter::DateRange;
    use crate::domain::models::record::TransactionRecord;

    /// What the dashboard is asked to show
    #[derive(Debug, Clone, Default)]
    pub struct DashboardQuery {
        pub range: DateRange,
        /// 1 based; clamped into the available pages
        pub page: usize,
    }

    /// One page of the filtered ledger with its summary figures
    #[derive(Debug, Clone)]
    pub struct DashboardPage {
        pub records: Vec<TransactionRecord>,
        pub range: DateRange,
        pub page: usize,
        pub total_pages: usize,
        pub page_size: usize,
        pub filtered_count: usize,
        pub total_count: usize,
        pub filtered_total: f64,
        pub today_total: f64,
        pub all_time_total: f64,
    }
}
