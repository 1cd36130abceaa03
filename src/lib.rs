//! saldo-cli - Bank ledger reconciliation and analysis
//!
//! This library reconstructs a verified running balance from a bank-style
//! transaction ledger, then supports date/keyword filtering and financial
//! summarization. Snapshot rows (bank-reported balance checkpoints) are
//! extracted during reconciliation and kept out of all totals.
//!
//! # Architecture
//!
//! - `config`: settings file and path management
//! - `error`: custom error types
//! - `models`: monetary amounts, ledger records, ledgers
//! - `services`: the pure core — balance reconstruction and filtering
//! - `reports`: financial summary, monthly buckets, chart series
//! - `import`: CSV loading boundary
//! - `export`: CSV re-serialization of filtered transactions
//! - `display`: terminal table rendering
//! - `cli`: command handlers
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use saldo::models::{Money, RawRecord};
//! use saldo::services::{filter, reconstruct};
//! use saldo::reports::FinancialSummary;
//!
//! let rows = vec![
//!     RawRecord::new(
//!         NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!         "Salary",
//!         Money::from_cents(100_000),
//!     ),
//!     RawRecord::new(
//!         NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
//!         "Rent",
//!         Money::from_cents(-40_000),
//!     ),
//! ];
//!
//! let ledger = reconstruct(rows, "Kontostand");
//! let (start, end) = ledger.date_span().unwrap();
//! let filtered = filter(&ledger, start, end, &[]).unwrap();
//! let summary = FinancialSummary::generate(&filtered.included, start, end);
//! assert_eq!(summary.net_balance, Money::from_cents(60_000));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{SaldoError, SaldoResult};
