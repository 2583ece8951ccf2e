//! Record table formatting for the ledger dashboard.
//!
//! Turns decoded records into display rows using Indonesian conventions:
//! `Rp 25.000` for money and `D/M/YYYY` for dates.

use chrono::NaiveDate;
use shared::{AmountType, FormattedRecord};

use crate::domain::currency::format_rupiah;
use crate::domain::ledger_filter::DateRange;
use crate::domain::models::record::TransactionRecord;

#[derive(Clone, Default)]
pub struct RecordTableService;

impl RecordTableService {
    pub fn new() -> Self {
        Self
    }

    pub fn format_records(&self, records: &[TransactionRecord]) -> Vec<FormattedRecord> {
        records.iter().map(|record| self.format_record(record)).collect()
    }

    pub fn format_record(&self, record: &TransactionRecord) -> FormattedRecord {
        FormattedRecord {
            no: record.no,
            player_name: record.player_name.clone(),
            ball_count: record.ball_count,
            formatted_actual_price: format_rupiah(record.actual_price),
            formatted_paid_price: format_rupiah(record.paid_price),
            formatted_difference: self.format_difference(record.difference),
            difference_type: self.classify_amount(record.difference),
            formatted_date: record.date.map(|d| self.format_date(d)).unwrap_or_default(),
            raw_difference: record.difference,
            raw_date: record.date,
        }
    }

    /// Positive differences get an explicit plus sign
    pub fn format_difference(&self, amount: f64) -> String {
        if amount > 0.0 {
            format!("+{}", format_rupiah(amount))
        } else {
            format_rupiah(amount)
        }
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format("%-d/%-m/%Y").to_string()
    }

    pub fn classify_amount(&self, amount: f64) -> AmountType {
        if amount > 0.0 {
            AmountType::Positive
        } else if amount < 0.0 {
            AmountType::Negative
        } else {
            AmountType::Zero
        }
    }

    pub fn range_label(&self, range: &DateRange) -> String {
        match (range.from, range.to) {
            (Some(from), Some(to)) => format!("{} - {}", self.format_date(from), self.format_date(to)),
            (Some(from), None) => format!("Dari {}", self.format_date(from)),
            (None, Some(to)) => format!("Sampai {}", self.format_date(to)),
            (None, None) => "Semua waktu".to_string(),
        }
    }
}
