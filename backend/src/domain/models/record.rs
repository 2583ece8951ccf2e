use chrono::NaiveDate;

/// A decoded ledger row.
///
/// `difference` is kept exactly as the sheet reports it; the treasurer may
/// adjust it by hand, so it is never recomputed from the two prices.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub no: i64,
    pub player_name: String,
    pub ball_count: i64,
    pub actual_price: f64,
    pub paid_price: f64,
    pub difference: f64,
    pub date: Option<NaiveDate>,
}
