//! Balance reconstruction
//!
//! Turns an unordered set of raw ledger rows into a reconciled `Ledger`:
//! snapshot rows are extracted, transactions are sorted chronologically, and
//! a running balance is computed by a single scan over the sorted sequence.
//!
//! The first sorted row seeds the balance with its own amount — the earliest
//! row is treated as the statement opening balance, not as a delta from some
//! other known starting point. Reconstructed balances are never checked
//! against the bank-reported snapshot figures; snapshots are carried for
//! display only.

use crate::models::{Ledger, Money, RawRecord, RecordKind, SnapshotRecord, TransactionRecord};

/// Reconstruct a ledger from raw rows
///
/// Rows whose description contains `marker` (case-sensitive) are extracted
/// as snapshots in input order. The remaining rows are stably sorted by date
/// ascending — undated rows after all dated rows, equal dates keeping input
/// order — and the running balance is computed over that sequence.
///
/// An empty input yields an empty ledger, not an error.
pub fn reconstruct(rows: Vec<RawRecord>, marker: &str) -> Ledger {
    let mut snapshots = Vec::new();
    let mut candidates = Vec::new();

    for row in rows {
        match RecordKind::classify(&row.description, marker) {
            RecordKind::Snapshot => snapshots.push(SnapshotRecord::from_raw(row)),
            RecordKind::Transaction => candidates.push(row),
        }
    }

    // Stable sort: undated rows last, equal dates keep input order. The
    // source ordering is assumed to reflect intra-day sequence.
    candidates.sort_by_key(|row| (row.date.is_none(), row.date));

    Ledger {
        transactions: scan_balances(candidates, marker),
        snapshots,
    }
}

/// Compute running balances over an already-sorted transaction sequence
///
/// The first row's balance equals its own amount. Every later row adds its
/// amount to the running balance — unless its description still contains the
/// marker term (an incidental mention that survived extraction), in which
/// case the balance is carried forward unchanged.
pub fn scan_balances(rows: Vec<RawRecord>, marker: &str) -> Vec<TransactionRecord> {
    let mut transactions = Vec::with_capacity(rows.len());
    let mut balance = Money::zero();

    for (i, row) in rows.into_iter().enumerate() {
        balance = if i == 0 {
            row.amount
        } else if row.description.contains(marker) {
            balance
        } else {
            balance + row.amount
        };
        transactions.push(TransactionRecord::from_raw(row, balance));
    }

    transactions
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const MARKER: &str = "Kontostand";

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row(y: i32, m: u32, d: u32, desc: &str, cents: i64) -> RawRecord {
        RawRecord::new(date(y, m, d), desc, Money::from_cents(cents))
    }

    #[test]
    fn test_empty_input_yields_empty_ledger() {
        let ledger = reconstruct(Vec::new(), MARKER);
        assert!(ledger.transactions.is_empty());
        assert!(ledger.snapshots.is_empty());
    }

    #[test]
    fn test_partitions_input_exactly() {
        let rows = vec![
            row(2024, 1, 1, "Salary", 100_000),
            row(2024, 1, 5, "Kontostand am 05.01.", 100_000),
            row(2024, 1, 10, "Rent", -40_000),
            row(2024, 2, 1, "Kontostand am 01.02.", 60_000),
        ];
        let ledger = reconstruct(rows, MARKER);

        assert_eq!(ledger.transactions.len(), 2);
        assert_eq!(ledger.snapshots.len(), 2);
    }

    #[test]
    fn test_salary_snapshot_rent_balances() {
        // Salary +1000, snapshot, Rent -400 -> balances [1000, 600]
        let rows = vec![
            row(2024, 1, 1, "Salary", 100_000),
            row(2024, 1, 5, "Kontostand: 1000", 100_000),
            row(2024, 1, 10, "Rent", -40_000),
        ];
        let ledger = reconstruct(rows, MARKER);

        assert_eq!(ledger.transactions[0].balance.cents(), 100_000);
        assert_eq!(ledger.transactions[1].balance.cents(), 60_000);
        assert_eq!(ledger.snapshots.len(), 1);
        assert_eq!(ledger.snapshots[0].reported_balance.cents(), 100_000);
    }

    #[test]
    fn test_first_row_seeds_balance_with_own_amount() {
        let rows = vec![row(2024, 1, 1, "Opening", -5_000)];
        let ledger = reconstruct(rows, MARKER);
        assert_eq!(ledger.transactions[0].balance.cents(), -5_000);
    }

    #[test]
    fn test_sorts_by_date_before_computing_balances() {
        let rows = vec![
            row(2024, 1, 10, "Rent", -40_000),
            row(2024, 1, 1, "Salary", 100_000),
        ];
        let ledger = reconstruct(rows, MARKER);

        assert_eq!(ledger.transactions[0].description, "Salary");
        assert_eq!(ledger.transactions[0].balance.cents(), 100_000);
        assert_eq!(ledger.transactions[1].balance.cents(), 60_000);
    }

    #[test]
    fn test_equal_dates_keep_input_order() {
        let rows = vec![
            row(2024, 1, 1, "first", 100),
            row(2024, 1, 1, "second", 200),
            row(2024, 1, 1, "third", 300),
        ];
        let ledger = reconstruct(rows, MARKER);

        let order: Vec<_> = ledger
            .transactions
            .iter()
            .map(|t| t.description.as_str())
            .collect();
        assert_eq!(order, ["first", "second", "third"]);
        assert_eq!(ledger.transactions[2].balance.cents(), 600);
    }

    #[test]
    fn test_undated_rows_sort_last_and_still_get_a_balance() {
        let rows = vec![
            RawRecord::undated("??", "Mystery", Money::from_cents(500)),
            row(2024, 1, 1, "Salary", 100_000),
        ];
        let ledger = reconstruct(rows, MARKER);

        assert_eq!(ledger.transactions[0].description, "Salary");
        assert_eq!(ledger.transactions[1].description, "Mystery");
        assert_eq!(ledger.transactions[1].balance.cents(), 100_500);
    }

    #[test]
    fn test_balance_recurrence_holds() {
        let rows = vec![
            row(2024, 1, 1, "a", 1_000),
            row(2024, 1, 2, "b", -250),
            row(2024, 1, 3, "c", 300),
            row(2024, 1, 4, "d", -50),
        ];
        let ledger = reconstruct(rows, MARKER);

        for i in 1..ledger.transactions.len() {
            let prev = ledger.transactions[i - 1].balance;
            let cur = &ledger.transactions[i];
            assert_eq!(cur.balance, prev + cur.amount);
        }
    }

    #[test]
    fn test_scan_carries_balance_forward_on_incidental_marker() {
        let rows = vec![
            row(2024, 1, 1, "Salary", 100_000),
            row(2024, 1, 2, "Fee re Kontostand query", -1_000),
            row(2024, 1, 3, "Groceries", -2_000),
        ];
        let transactions = scan_balances(rows, MARKER);

        assert_eq!(transactions[0].balance.cents(), 100_000);
        // Marker mention: amount ignored, balance carried forward
        assert_eq!(transactions[1].balance.cents(), 100_000);
        assert_eq!(transactions[2].balance.cents(), 98_000);
    }

    #[test]
    fn test_snapshots_keep_input_order() {
        let rows = vec![
            row(2024, 2, 1, "Kontostand Feb", 200),
            row(2024, 1, 1, "Kontostand Jan", 100),
        ];
        let ledger = reconstruct(rows, MARKER);

        assert_eq!(ledger.snapshots[0].description, "Kontostand Feb");
        assert_eq!(ledger.snapshots[1].description, "Kontostand Jan");
    }
}
