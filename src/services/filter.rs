//! Transaction filtering
//!
//! Partitions a reconciled ledger into the rows passing a date-range and
//! keyword filter and the rows whose date could not be parsed. Filtering is
//! a pure view over the ledger — the ledger itself is never mutated — and is
//! idempotent for a fixed range and keyword set.

use chrono::NaiveDate;

use crate::error::{SaldoError, SaldoResult};
use crate::models::{FilteredLedger, Ledger, TransactionRecord};

/// Filter a ledger by inclusive date range and keywords
///
/// Rows without a parseable date land in `invalid_date` and take no part in
/// any downstream computation; they are reported, never silently dropped.
/// Dated rows are kept iff `start <= date <= end`. A non-empty keyword list
/// additionally requires the description to contain at least one keyword as
/// a case-insensitive substring (OR across keywords); an empty list is a
/// no-op.
///
/// # Errors
///
/// Returns [`SaldoError::InvalidRange`] before any filtering runs if
/// `start > end`.
pub fn filter(
    ledger: &Ledger,
    start: NaiveDate,
    end: NaiveDate,
    keywords: &[String],
) -> SaldoResult<FilteredLedger> {
    if start > end {
        return Err(SaldoError::InvalidRange { start, end });
    }

    let lowered: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    let mut included = Vec::new();
    let mut invalid_date = Vec::new();

    for txn in &ledger.transactions {
        match txn.date {
            None => invalid_date.push(txn.clone()),
            Some(date) => {
                if date < start || date > end {
                    continue;
                }
                if matches_keywords(txn, &lowered) {
                    included.push(txn.clone());
                }
            }
        }
    }

    Ok(FilteredLedger {
        included,
        invalid_date,
    })
}

/// Check a row against lowercased keywords (empty list matches everything)
fn matches_keywords(txn: &TransactionRecord, lowered: &[String]) -> bool {
    if lowered.is_empty() {
        return true;
    }
    let description = txn.description.to_lowercase();
    lowered.iter().any(|k| description.contains(k))
}

/// Split a comma-separated keyword string into trimmed, non-empty keywords
///
/// Mirrors a free-text keyword box: "rent, ,salary" yields ["rent", "salary"].
pub fn parse_keywords(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect()
}
