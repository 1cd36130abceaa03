//! Snapshot display formatting
//!
//! Lists bank-reported balance checkpoints next to the reconstructed balance
//! at the same date. The two figures are displayed side by side but never
//! compared programmatically — the cross check stays a human's job for now.

use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Ledger;

#[derive(Tabled)]
struct SnapshotRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Reported")]
    reported: String,
    #[tabled(rename = "Computed")]
    computed: String,
}

/// Format the ledger's snapshots as a table, pairing each bank-reported
/// balance with the computed running balance as of the snapshot date
pub fn format_snapshot_table(ledger: &Ledger, currency_symbol: &str, date_format: &str) -> String {
    if ledger.snapshots.is_empty() {
        return "No balance snapshots found.\n".to_string();
    }

    let rows: Vec<SnapshotRow> = ledger
        .snapshots
        .iter()
        .map(|snap| SnapshotRow {
            date: match snap.date {
                Some(d) => d.format(date_format).to_string(),
                None => format!("({})", snap.date_raw),
            },
            description: snap.description.clone(),
            reported: snap.reported_balance.format_with_symbol(currency_symbol),
            computed: match snap.date.and_then(|d| balance_as_of(ledger, d)) {
                Some(balance) => balance.format_with_symbol(currency_symbol),
                None => "-".to_string(),
            },
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// The reconstructed balance after the last transaction dated on or before
/// `date`, if any
fn balance_as_of(ledger: &Ledger, date: NaiveDate) -> Option<crate::models::Money> {
    ledger
        .transactions
        .iter()
        .filter(|t| t.date.is_some_and(|d| d <= date))
        .last()
        .map(|t| t.balance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, RawRecord};
    use crate::services::reconstruct;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ledger() -> Ledger {
        reconstruct(
            vec![
                RawRecord::new(date(2024, 1, 1), "Salary", Money::from_cents(100_000)),
                RawRecord::new(date(2024, 1, 5), "Kontostand", Money::from_cents(100_000)),
                RawRecord::new(date(2024, 1, 10), "Rent", Money::from_cents(-40_000)),
            ],
            "Kontostand",
        )
    }

    #[test]
    fn test_balance_as_of() {
        let ledger = ledger();
        assert_eq!(
            balance_as_of(&ledger, date(2024, 1, 5)).unwrap().cents(),
            100_000
        );
        assert_eq!(
            balance_as_of(&ledger, date(2024, 1, 31)).unwrap().cents(),
            60_000
        );
        assert!(balance_as_of(&ledger, date(2023, 12, 31)).is_none());
    }

    #[test]
    fn test_snapshot_table_pairs_reported_and_computed() {
        let table = format_snapshot_table(&ledger(), "€", "%d.%m.%Y");

        assert!(table.contains("05.01.2024"));
        assert!(table.contains("Reported"));
        assert!(table.contains("Computed"));
        // Reported and computed both €1000.00 at the snapshot date
        assert!(table.contains("€1000.00"));
    }

    #[test]
    fn test_no_snapshots() {
        let ledger = Ledger::default();
        assert_eq!(
            format_snapshot_table(&ledger, "€", "%d.%m.%Y"),
            "No balance snapshots found.\n"
        );
    }
}
