//! Ledger record models
//!
//! Represents the rows of a bank ledger: raw rows as the loader hands them
//! over, transactions with a reconstructed running balance, and bank-reported
//! balance snapshots.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// A raw ledger row as produced by the loader
///
/// The loader guarantees a parseable amount; rows with malformed amounts are
/// skipped and reported before they ever become a `RawRecord`. The date may
/// still be invalid (`None`) — such rows are carried along and quarantined
/// later by the filter stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Parsed calendar date, or None if the date text was unparseable
    pub date: Option<NaiveDate>,

    /// The original date text, kept for reporting invalid rows
    #[serde(default)]
    pub date_raw: String,

    /// Free-text description (searched by keyword, checked for the snapshot marker)
    pub description: String,

    /// Signed amount: positive for income, negative for expenses
    pub amount: Money,
}

impl RawRecord {
    /// Create a raw record with a valid date
    pub fn new(date: NaiveDate, description: impl Into<String>, amount: Money) -> Self {
        Self {
            date: Some(date),
            date_raw: date.format("%Y-%m-%d").to_string(),
            description: description.into(),
            amount,
        }
    }

    /// Create a raw record whose date text could not be parsed
    pub fn undated(date_raw: impl Into<String>, description: impl Into<String>, amount: Money) -> Self {
        Self {
            date: None,
            date_raw: date_raw.into(),
            description: description.into(),
            amount,
        }
    }
}

/// A transaction with its reconstructed running balance
///
/// Only the reconciliation pass creates these, so `balance` is populated by
/// construction — there is no "balance not yet computed" state to represent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Parsed calendar date, or None if the date text was unparseable
    pub date: Option<NaiveDate>,

    /// The original date text, kept for reporting invalid rows
    #[serde(default)]
    pub date_raw: String,

    /// Free-text description
    pub description: String,

    /// Signed amount: positive for income, negative for expenses
    pub amount: Money,

    /// Running account balance after this transaction
    pub balance: Money,
}

impl TransactionRecord {
    /// Build a transaction from a raw row and its computed running balance
    pub fn from_raw(raw: RawRecord, balance: Money) -> Self {
        Self {
            date: raw.date,
            date_raw: raw.date_raw,
            description: raw.description,
            amount: raw.amount,
            balance,
        }
    }
}

/// A bank-reported point-in-time balance checkpoint
///
/// Snapshot rows never contribute to totals or to the running-balance
/// recurrence; they are retained for display next to the computed balance so
/// a consistency check can be added later without a model change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    /// Parsed calendar date, or None if the date text was unparseable
    pub date: Option<NaiveDate>,

    /// The original date text
    #[serde(default)]
    pub date_raw: String,

    /// Free-text description containing the snapshot marker
    pub description: String,

    /// The bank's own balance figure for this point in time
    pub reported_balance: Money,
}

impl SnapshotRecord {
    /// Build a snapshot from a raw row; the raw amount field carries the
    /// bank-reported balance
    pub fn from_raw(raw: RawRecord) -> Self {
        Self {
            date: raw.date,
            date_raw: raw.date_raw,
            description: raw.description,
            reported_balance: raw.amount,
        }
    }
}

/// Classification of a raw row into one of the two record kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// A transaction candidate
    Transaction,
    /// A bank-reported balance checkpoint
    Snapshot,
}

impl RecordKind {
    /// Classify a row by the snapshot marker rule: a row is a snapshot if and
    /// only if its description contains the marker as a case-sensitive
    /// substring.
    pub fn classify(description: &str, marker: &str) -> Self {
        if description.contains(marker) {
            Self::Snapshot
        } else {
            Self::Transaction
        }
    }
}
