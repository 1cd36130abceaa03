//! Ledger models
//!
//! A `Ledger` is the output of one reconciliation pass over a raw input
//! stream: sorted transactions with running balances plus the separately
//! retained snapshot rows. A `FilteredLedger` is a derived view produced by
//! the filter stage — filtering never mutates the ledger it came from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::{SnapshotRecord, TransactionRecord};

/// A reconciled ledger: one input source, reconstructed once, then immutable
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    /// Transactions sorted by date ascending with running balances populated
    pub transactions: Vec<TransactionRecord>,

    /// Bank-reported balance checkpoints, input order preserved
    pub snapshots: Vec<SnapshotRecord>,
}

impl Ledger {
    /// Check if the ledger holds no transactions
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The earliest and latest transaction dates, if any row has a valid date
    ///
    /// Used to default a date-range filter to the full span of the ledger.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self.transactions.iter().filter_map(|t| t.date);
        let first = dates.next()?;
        let (min, max) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Some((min, max))
    }
}

/// The result of filtering a ledger by date range and keywords
///
/// `included` holds the rows passing every filter; `invalid_date` holds rows
/// whose date could not be parsed — excluded from all analysis but reported,
/// never silently dropped. Out-of-range rows are not retained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilteredLedger {
    /// Rows passing the date-range and keyword filters, in ledger order
    pub included: Vec<TransactionRecord>,

    /// Rows whose date failed to parse, excluded from every computation
    pub invalid_date: Vec<TransactionRecord>,
}

impl FilteredLedger {
    /// Check if no rows passed the filters
    pub fn is_empty(&self) -> bool {
        self.included.is_empty()
    }
}
