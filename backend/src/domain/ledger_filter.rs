//! Date range filtering, totals and paging over decoded ledger records.
//!
//! Records are compared at day granularity: a range's `from` means the start
//! of that day and `to` the end of that day, so both bounds are inclusive.

use chrono::NaiveDate;

use crate::domain::models::record::TransactionRecord;

/// Rows per dashboard page
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Inclusive day range; a missing side is unbounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Records without a date only pass an unbounded range
    pub fn contains(&self, date: Option<NaiveDate>) -> bool {
        if !self.is_active() {
            return true;
        }
        let Some(date) = date else {
            return false;
        };
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }
}

/// Records inside `range`, ordered by `no` descending.
///
/// The sort is stable so rows sharing a number keep their sheet order.
pub fn filter_records(records: &[TransactionRecord], range: &DateRange) -> Vec<TransactionRecord> {
    let mut filtered: Vec<TransactionRecord> = records
        .iter()
        .filter(|record| range.contains(record.date))
        .cloned()
        .collect();
    filtered.sort_by(|a, b| b.no.cmp(&a.no));
    filtered
}

/// Sum of the `difference` column
pub fn aggregate(records: &[TransactionRecord]) -> f64 {
    records.iter().map(|record| record.difference).sum()
}

/// Cash collected on `today` within an already filtered set.
///
/// Only meaningful while a range is active; without one the figure is 0.
pub fn today_total(filtered: &[TransactionRecord], range: &DateRange, today: NaiveDate) -> f64 {
    if !range.is_active() {
        return 0.0;
    }
    filtered
        .iter()
        .filter(|record| record.date == Some(today))
        .map(|record| record.difference)
        .sum()
}

pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    item_count.div_ceil(page_size)
}

/// Clamp a requested page into `[1, total_pages]`, or 1 when there are none
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.min(total_pages).max(1)
}

/// Slice of `items` shown on the 1 based `page`
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Dashboard state: the fetched records plus the user's range and page.
///
/// Only raw inputs are stored; the filtered view is derived on demand.
#[derive(Debug, Clone)]
pub struct LedgerView {
    records: Vec<TransactionRecord>,
    range: DateRange,
    current_page: usize,
    page_size: usize,
}

impl LedgerView {
    pub fn new(records: Vec<TransactionRecord>, page_size: usize) -> Self {
        Self {
            records,
            range: DateRange::unbounded(),
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Change the range; paging starts over at the first page
    pub fn set_range(&mut self, range: DateRange) {
        self.range = range;
        self.current_page = 1;
    }

    pub fn filtered(&self) -> Vec<TransactionRecord> {
        filter_records(&self.records, &self.range)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.page_size)
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = clamp_page(page, self.total_pages());
    }

    pub fn current_page_records(&self) -> Vec<TransactionRecord> {
        let filtered = self.filtered();
        page_slice(&filtered, self.current_page, self.page_size).to_vec()
    }

    pub fn filtered_total(&self) -> f64 {
        aggregate(&self.filtered())
    }

    pub fn today_total(&self, today: NaiveDate) -> f64 {
        today_total(&self.filtered(), &self.range, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(no: i64, date: Option<NaiveDate>, difference: f64) -> TransactionRecord {
        TransactionRecord {
            no,
            player_name: format!("player {}", no),
            ball_count: 1,
            actual_price: 20000.0,
            paid_price: 20000.0 + difference,
            difference,
            date,
        }
    }

    fn sample() -> Vec<TransactionRecord> {
        vec![
            record(1, Some(day(2024, 11, 28)), 1000.0),
            record(2, Some(day(2024, 11, 30)), -500.0),
            record(3, Some(day(2024, 12, 1)), 2000.0),
            record(4, None, 700.0),
            record(5, Some(day(2024, 12, 3)), 300.0),
            record(6, Some(day(2024, 12, 5)), 0.0),
        ]
    }

    #[test]
    fn test_unbounded_range_only_reorders() {
        let records = sample();
        let filtered = filter_records(&records, &DateRange::unbounded());

        let numbers: Vec<i64> = filtered.iter().map(|r| r.no).collect();
        assert_eq!(numbers, vec![6, 5, 4, 3, 2, 1]);
        assert_eq!(filtered.len(), records.len());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let range = DateRange::new(Some(day(2024, 11, 30)), Some(day(2024, 12, 3)));
        let numbers: Vec<i64> = filter_records(&sample(), &range).iter().map(|r| r.no).collect();
        assert_eq!(numbers, vec![5, 3, 2]);
    }

    #[test]
    fn test_open_ended_ranges() {
        let from_only = DateRange::new(Some(day(2024, 12, 1)), None);
        let numbers: Vec<i64> = filter_records(&sample(), &from_only).iter().map(|r| r.no).collect();
        assert_eq!(numbers, vec![6, 5, 3]);

        let to_only = DateRange::new(None, Some(day(2024, 11, 30)));
        let numbers: Vec<i64> = filter_records(&sample(), &to_only).iter().map(|r| r.no).collect();
        assert_eq!(numbers, vec![2, 1]);
    }

    #[test]
    fn test_filter_is_sound_and_complete() {
        let records = sample();
        let ranges = [
            DateRange::unbounded(),
            DateRange::new(Some(day(2024, 12, 1)), Some(day(2024, 12, 1))),
            DateRange::new(Some(day(2024, 12, 2)), None),
            DateRange::new(None, Some(day(2024, 11, 1))),
            DateRange::new(Some(day(2024, 12, 5)), Some(day(2024, 11, 1))),
        ];

        for range in ranges {
            let filtered = filter_records(&records, &range);
            assert!(filtered.iter().all(|r| range.contains(r.date)));
            let expected = records.iter().filter(|r| range.contains(r.date)).count();
            assert_eq!(filtered.len(), expected);
            assert!(filtered.windows(2).all(|pair| pair[0].no >= pair[1].no));
        }
    }

    #[test]
    fn test_sort_is_stable_for_equal_numbers() {
        let mut first = record(9, Some(day(2024, 1, 1)), 1.0);
        first.player_name = "first".to_string();
        let mut second = record(9, Some(day(2024, 1, 2)), 2.0);
        second.player_name = "second".to_string();
        let records = vec![record(1, None, 0.0), first, second, record(10, None, 0.0)];

        let filtered = filter_records(&records, &DateRange::unbounded());
        let names: Vec<&str> = filtered.iter().map(|r| r.player_name.as_str()).collect();
        assert_eq!(names, vec!["player 10", "first", "second", "player 1"]);
    }

    #[test]
    fn test_aggregate() {
        assert_eq!(aggregate(&[]), 0.0);

        let records = sample();
        let (left, right) = records.split_at(2);
        assert_eq!(aggregate(&records), aggregate(left) + aggregate(right));
        assert_eq!(aggregate(&records), 3500.0);
    }

    #[test]
    fn test_today_total_needs_active_range() {
        let records = sample();
        let today = day(2024, 12, 1);

        assert_eq!(today_total(&records, &DateRange::unbounded(), today), 0.0);

        let range = DateRange::new(Some(day(2024, 11, 1)), None);
        let filtered = filter_records(&records, &range);
        assert_eq!(today_total(&filtered, &range, today), 2000.0);
    }

    #[test]
    fn test_paging_helpers() {
        assert_eq!(total_pages(0, 100), 0);
        assert_eq!(total_pages(100, 100), 1);
        assert_eq!(total_pages(101, 100), 2);

        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(7, 3), 3);
        assert_eq!(clamp_page(5, 0), 1);

        let items: Vec<u32> = (1..=5).collect();
        assert_eq!(page_slice(&items, 1, 2), &[1, 2]);
        assert_eq!(page_slice(&items, 3, 2), &[5]);
        assert!(page_slice(&items, 4, 2).is_empty());
    }

    #[test]
    fn test_ledger_view_resets_page_on_new_range() {
        let records: Vec<TransactionRecord> = (1..=5)
            .map(|no| record(no, Some(day(2024, 12, no as u32)), 100.0))
            .collect();
        let mut view = LedgerView::new(records, 2);

        assert_eq!(view.total_pages(), 3);
        view.go_to_page(3);
        assert_eq!(view.current_page(), 3);
        let numbers: Vec<i64> = view.current_page_records().iter().map(|r| r.no).collect();
        assert_eq!(numbers, vec![1]);

        view.set_range(DateRange::new(Some(day(2024, 12, 2)), Some(day(2024, 12, 4))));
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.filtered_total(), 300.0);
        assert_eq!(view.today_total(day(2024, 12, 3)), 100.0);

        view.go_to_page(99);
        assert_eq!(view.current_page(), 2);
    }
}
