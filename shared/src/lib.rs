use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of the club cash ledger as served by `GET /api/records`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Running row number from the sheet, used as the sort key
    pub no: i64,
    /// Player who bought the shuttlecocks (may be empty)
    pub player_name: String,
    /// Number of shuttlecocks in this purchase
    pub ball_count: i64,
    /// What the shuttlecocks actually cost
    pub actual_price: f64,
    /// What the player paid into the cash box
    pub paid_price: f64,
    /// Cash difference as recorded in the sheet
    pub difference: f64,
    /// Calendar day of the transaction (ISO `YYYY-MM-DD`)
    pub date: Option<NaiveDate>,
}

/// Response body of `GET /api/total`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalResponse {
    pub total: f64,
}

/// Sign of a cash amount, used for styling the difference column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmountType {
    Positive,
    Negative,
    Zero,
}

/// A ledger row prepared for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedRecord {
    pub no: i64,
    pub player_name: String,
    pub ball_count: i64,
    pub formatted_actual_price: String,
    pub formatted_paid_price: String,
    pub formatted_difference: String,
    pub difference_type: AmountType,
    pub formatted_date: String,
    pub raw_difference: f64,
    pub raw_date: Option<NaiveDate>,
}

/// One page of the filtered ledger plus its summary figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub records: Vec<FormattedRecord>,
    pub page: u32,
    pub total_pages: u32,
    pub page_size: u32,
    /// Records matching the active date range
    pub filtered_count: usize,
    /// Records fetched before filtering
    pub total_count: usize,
    pub filtered_total: f64,
    pub today_total: f64,
    pub all_time_total: f64,
    pub formatted_filtered_total: String,
    pub formatted_today_total: String,
    pub formatted_all_time_total: String,
    /// Human readable description of the active date range
    pub range_label: String,
}

/// Scoreboard side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::A => write!(f, "A"),
            Team::B => write!(f, "B"),
        }
    }
}

/// Scores right after a point was awarded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointEvent {
    pub score_a: u32,
    pub score_b: u32,
    pub team: Team,
}

/// Response body of every `/api/score` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchStateResponse {
    pub score_a: u32,
    pub score_b: u32,
    pub is_over: bool,
    pub winner: Option<Team>,
    pub history: Vec<PointEvent>,
    pub can_undo: bool,
}
