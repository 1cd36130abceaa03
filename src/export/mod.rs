//! Export functionality for saldo-cli
//!
//! CSV re-serialization of filtered transactions for external consumers.

pub mod csv;

pub use csv::export_transactions_csv;
