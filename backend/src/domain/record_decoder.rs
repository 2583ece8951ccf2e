//! Decoding of ledger sheet rows into [`TransactionRecord`]s.
//!
//! Every field is decoded on its own: a bad price or a missing date never
//! throws the rest of the row away.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::currency::{leading_integer, parse_currency, RawAmount};
use crate::domain::models::cell::{Cell, CellValue, Row};
use crate::domain::models::record::TransactionRecord;

/// Sheet date literal, month is zero based: `Date(2024,11,1)` is 1 December
static SHEET_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Date\((\d+),(\d+),(\d+)\)").expect("sheet date pattern is valid"));

/// Text layouts accepted for date cells that are not `Date(...)` literals
const DATE_TEXT_FORMATS: [&str; 2] = ["%m/%d/%Y", "%Y-%m-%d"];

pub const COL_NO: usize = 0;
pub const COL_PLAYER: usize = 1;
pub const COL_BALL_COUNT: usize = 2;
pub const COL_ACTUAL_PRICE: usize = 3;
pub const COL_PAID_PRICE: usize = 4;
pub const COL_DIFFERENCE: usize = 5;
pub const COL_DATE: usize = 6;

/// A cell value after picking raw value, display string or empty
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    Number(f64),
    Text(String),
    Date(NaiveDate),
    Empty,
}

impl Resolved {
    /// Text form of the value, dates as `M/D/YYYY`
    pub fn as_text(&self) -> String {
        match self {
            Resolved::Number(n) => n.to_string(),
            Resolved::Text(s) => s.clone(),
            Resolved::Date(d) => d.format("%-m/%-d/%Y").to_string(),
            Resolved::Empty => String::new(),
        }
    }

    fn as_integer(&self) -> i64 {
        match self {
            Resolved::Number(n) if n.is_finite() => n.trunc() as i64,
            Resolved::Number(_) | Resolved::Empty => 0,
            other => leading_integer(&other.as_text()).unwrap_or(0),
        }
    }

    pub fn as_amount(&self) -> f64 {
        match self {
            Resolved::Number(n) => parse_currency(RawAmount::Number(*n)),
            Resolved::Empty => parse_currency(RawAmount::Empty),
            other => parse_currency(RawAmount::Text(&other.as_text())),
        }
    }

    fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Resolved::Date(d) => Some(*d),
            Resolved::Text(s) => parse_date_text(s),
            Resolved::Number(_) | Resolved::Empty => None,
        }
    }
}

/// Resolve a cell: raw value first, then the display string, then empty
pub fn resolve_cell(cell: Option<&Cell>) -> Resolved {
    let Some(cell) = cell else {
        return Resolved::Empty;
    };

    match &cell.value {
        Some(CellValue::Number(n)) => Resolved::Number(*n),
        Some(CellValue::Bool(b)) => Resolved::Text(b.to_string()),
        Some(CellValue::Text(s)) => match parse_sheet_date(s) {
            Some(date) => Resolved::Date(date),
            None => Resolved::Text(s.clone()),
        },
        None => match &cell.formatted {
            Some(display) => Resolved::Text(display.clone()),
            None => Resolved::Empty,
        },
    }
}

/// Parse a `Date(Y,M,D)` literal with a zero based month
pub fn parse_sheet_date(value: &str) -> Option<NaiveDate> {
    if !value.starts_with("Date(") {
        return None;
    }
    let captures = SHEET_DATE.captures(value)?;
    let year: i32 = captures[1].parse().ok()?;
    let month: u32 = captures[2].parse().ok()?;
    let day: u32 = captures[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month.checked_add(1)?, day)
}

fn parse_date_text(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_TEXT_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

/// Decode one data row. The caller drops the header row beforehand.
pub fn decode_row(cells: &Row) -> TransactionRecord {
    let field = |index: usize| resolve_cell(cells.get(index).and_then(Option::as_ref));

    TransactionRecord {
        no: field(COL_NO).as_integer(),
        player_name: field(COL_PLAYER).as_text(),
        ball_count: field(COL_BALL_COUNT).as_integer().max(0),
        actual_price: field(COL_ACTUAL_PRICE).as_amount(),
        paid_price: field(COL_PAID_PRICE).as_amount(),
        difference: field(COL_DIFFERENCE).as_amount(),
        date: field(COL_DATE).as_date(),
    }
}

/// Decode every row after the header
pub fn decode_rows(rows: &[Row]) -> Vec<TransactionRecord> {
    rows.iter().skip(1).map(decode_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_row() -> Row {
        vec![
            Some(Cell::number(12.0)),
            Some(Cell::text("Andi")),
            Some(Cell::number(3.0)),
            Some(Cell::text("Rp 75.000")),
            Some(Cell::text("Rp 80.000")),
            Some(Cell::text("Rp 5.000")),
            Some(Cell::text("Date(2024,11,1)")),
        ]
    }

    #[test]
    fn test_decode_full_row() {
        let record = decode_row(&full_row());

        assert_eq!(record.no, 12);
        assert_eq!(record.player_name, "Andi");
        assert_eq!(record.ball_count, 3);
        assert_eq!(record.actual_price, 75000.0);
        assert_eq!(record.paid_price, 80000.0);
        assert_eq!(record.difference, 5000.0);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 12, 1));
    }

    #[test]
    fn test_sheet_date_month_is_zero_based() {
        assert_eq!(parse_sheet_date("Date(2024,11,1)"), NaiveDate::from_ymd_opt(2024, 12, 1));
        assert_eq!(parse_sheet_date("Date(2025,0,31)"), NaiveDate::from_ymd_opt(2025, 1, 31));
        assert_eq!(parse_sheet_date("Date(2024,12,1)"), None);
        assert_eq!(parse_sheet_date("12/1/2024"), None);
    }

    #[test]
    fn test_out_of_range_sheet_date_is_dropped() {
        assert_eq!(parse_sheet_date("Date(2024,4294967295,1)"), None);
        assert_eq!(parse_sheet_date("Date(2024,99999999999,1)"), None);

        let mut row = full_row();
        row[6] = Some(Cell::text("Date(2024,4294967295,1)"));
        let record = decode_row(&row);
        assert_eq!(record.date, None);
        assert_eq!(record.player_name, "Andi");
    }

    #[test]
    fn test_missing_trailing_cells_default() {
        let row: Row = vec![Some(Cell::number(4.0)), Some(Cell::text("Sari"))];
        let record = decode_row(&row);

        assert_eq!(record.no, 4);
        assert_eq!(record.player_name, "Sari");
        assert_eq!(record.ball_count, 0);
        assert_eq!(record.actual_price, 0.0);
        assert_eq!(record.paid_price, 0.0);
        assert_eq!(record.difference, 0.0);
        assert_eq!(record.date, None);
    }

    #[test]
    fn test_empty_row_defaults_every_field() {
        let record = decode_row(&Vec::new());
        assert_eq!(record.no, 0);
        assert_eq!(record.player_name, "");
        assert_eq!(record.date, None);
    }

    #[test]
    fn test_formatted_string_used_when_raw_value_missing() {
        let mut row = full_row();
        row[3] = Some(Cell::formatted("25,000"));
        row[0] = Some(Cell::default());
        let record = decode_row(&row);

        assert_eq!(record.actual_price, 25000.0);
        assert_eq!(record.no, 0);
    }

    #[test]
    fn test_raw_value_wins_over_formatted() {
        let mut row = full_row();
        row[5] = Some(Cell {
            value: Some(CellValue::Number(-2500.0)),
            formatted: Some("-Rp 2.500".to_string()),
        });
        assert_eq!(decode_row(&row).difference, -2500.0);
    }

    #[test]
    fn test_integer_coercion() {
        let mut row = full_row();
        row[0] = Some(Cell::text("17a"));
        row[2] = Some(Cell::number(2.9));
        let record = decode_row(&row);
        assert_eq!(record.no, 17);
        assert_eq!(record.ball_count, 2);

        row[0] = Some(Cell::text("abc"));
        row[2] = Some(Cell::number(-1.0));
        let record = decode_row(&row);
        assert_eq!(record.no, 0);
        assert_eq!(record.ball_count, 0);
    }

    #[test]
    fn test_malformed_field_does_not_abort_row() {
        let mut row = full_row();
        row[4] = Some(Cell::text("lunas"));
        row[6] = Some(Cell::text("kemarin"));
        let record = decode_row(&row);

        assert_eq!(record.paid_price, 0.0);
        assert_eq!(record.date, None);
        assert_eq!(record.actual_price, 75000.0);
        assert_eq!(record.player_name, "Andi");
    }

    #[test]
    fn test_text_dates() {
        let mut row = full_row();
        row[6] = Some(Cell::formatted("12/1/2024"));
        assert_eq!(decode_row(&row).date, NaiveDate::from_ymd_opt(2024, 12, 1));

        row[6] = Some(Cell::text("2024-03-09"));
        assert_eq!(decode_row(&row).date, NaiveDate::from_ymd_opt(2024, 3, 9));
    }

    #[test]
    fn test_numeric_player_name_is_stringified() {
        let mut row = full_row();
        row[1] = Some(Cell::number(5.0));
        assert_eq!(decode_row(&row).player_name, "5");
    }

    #[test]
    fn test_decode_rows_skips_header() {
        let header: Row = vec![Some(Cell::text("No")), Some(Cell::text("Pemain"))];
        let records = decode_rows(&[header, full_row()]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].no, 12);
    }
}
