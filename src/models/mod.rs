//! Core data models for saldo-cli
//!
//! This module contains the data structures that represent the ledger
//! domain: monetary amounts, raw and reconciled records, and ledgers.

pub mod ledger;
pub mod money;
pub mod record;

pub use ledger::{FilteredLedger, Ledger};
pub use money::{Money, MoneyParseError};
pub use record::{RawRecord, RecordKind, SnapshotRecord, TransactionRecord};
